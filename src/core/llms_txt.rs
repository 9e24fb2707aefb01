use crate::domain::model::ServiceSummary;
use crate::utils::error::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const SITE_TITLE: &str = "Docspine — Documentation Hub";
const SITE_BLURB: &str = "Aggregated documentation for registered services. Built with Docspine.";

/// Stage 3: plain-text link index, one `##` heading per domain in
/// lexicographic order, one link line per service in input order.
pub struct LlmsTxt {
    base_url: String,
}

impl LlmsTxt {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn render(&self, services: &[ServiceSummary]) -> String {
        let mut lines = vec![
            format!("# {}", SITE_TITLE),
            format!("> {}", SITE_BLURB),
            String::new(),
        ];

        // BTreeMap gives the lexicographic domain order; Vec preserves
        // input order within each domain.
        let mut groups: BTreeMap<&str, Vec<&ServiceSummary>> = BTreeMap::new();
        for svc in services {
            groups.entry(&svc.domain).or_default().push(svc);
        }

        for (domain, members) in &groups {
            lines.push(format!("## {}", title_case(domain)));
            for svc in members {
                lines.push(format!(
                    "- [{}]({}/{}/{}/)",
                    svc.name, self.base_url, domain, svc.id
                ));
            }
            lines.push(String::new());
        }

        lines.join("\n")
    }

    pub fn write(&self, services: &[ServiceSummary], dist_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dist_dir)?;
        let path = dist_dir.join("llms.txt");
        std::fs::write(&path, self.render(services))?;
        Ok(path)
    }
}

/// `checkout` -> `Checkout`, `site-reliability` -> `Site-Reliability`.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !c.is_alphanumeric();
    }
    out
}
