use crate::domain::model::ServiceSummary;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Static scaffolding: styles for both layouts, the Pagefind search overlay
/// and the client-side behavior. Only the `{{...}}` tokens are rendered
/// server-side.
const TEMPLATE: &str = include_str!("templates/landing.html");

/// Well-known domains keep a fixed display order (and accent colors in the
/// template); any other domain found in the data is appended in
/// lexicographic order rather than dropped.
const PREFERRED_DOMAIN_ORDER: [&str; 4] = ["checkout", "identity", "platform", "observability"];

/// Stage 2: one static HTML document embedding the service list as inline
/// data plus aggregate stats. Filtering, search and theming are client-side.
pub struct LandingPage;

impl LandingPage {
    pub fn render(services: &[ServiceSummary], generated_at: DateTime<Utc>) -> Result<String> {
        let services_json = serde_json::to_string(services)?;
        let domain_order = serde_json::to_string(&domain_order(services))?;

        let total_pages: u64 = services.iter().map(|s| u64::from(s.pages)).sum();
        let teams: BTreeSet<&str> = services
            .iter()
            .map(|s| s.team.as_str())
            .filter(|t| !t.is_empty())
            .collect();
        let domains: BTreeSet<&str> = services
            .iter()
            .map(|s| s.domain.as_str())
            .filter(|d| !d.is_empty())
            .collect();

        let html = TEMPLATE
            .replace("{{SERVICE_COUNT}}", &services.len().to_string())
            .replace("{{TEAM_COUNT}}", &teams.len().to_string())
            .replace("{{DOMAIN_COUNT}}", &domains.len().to_string())
            .replace("{{PAGE_COUNT}}", &total_pages.to_string())
            .replace("{{LAST_BUILD}}", &generated_at.format("%b %-d, %Y").to_string())
            .replace("{{SERVICES_JSON}}", &services_json)
            .replace("{{DOMAIN_ORDER_JSON}}", &domain_order);

        Ok(html)
    }

    pub fn write(services: &[ServiceSummary], dist_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dist_dir)?;
        let path = dist_dir.join("index.html");
        std::fs::write(&path, Self::render(services, Utc::now())?)?;
        Ok(path)
    }
}

/// Display order for domain groups, derived from the data.
fn domain_order(services: &[ServiceSummary]) -> Vec<String> {
    let present: BTreeSet<&str> = services.iter().map(|s| s.domain.as_str()).collect();

    let mut order: Vec<String> = PREFERRED_DOMAIN_ORDER
        .iter()
        .filter(|d| present.contains(**d))
        .map(|d| d.to_string())
        .collect();

    // BTreeSet iteration is already lexicographic.
    for domain in present {
        if !PREFERRED_DOMAIN_ORDER.contains(&domain) {
            order.push(domain.to_string());
        }
    }

    order
}
