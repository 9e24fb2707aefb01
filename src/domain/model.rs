use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed documentation-type vocabulary (Diataxis quadrants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiataxisTag {
    HowTo,
    Reference,
    Explanation,
    Tutorial,
}

/// Normalized per-service record carried between pipeline stages.
///
/// Field names match the on-disk `services.json` layout exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub id: String,
    pub name: String,
    pub domain: String,
    pub team: String,
    pub pages: u32,
    pub diataxis: Vec<DiataxisTag>,
}

/// Destination-path policy: how built docs are laid out under dist/.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    Flat,
    Team,
    #[default]
    Domain,
}

impl Grouping {
    /// Dist-relative destination for a record. Pure: depends only on the
    /// policy and the record's (domain, team, id). Every stage that needs a
    /// service's location must go through this.
    pub fn dest_path(&self, summary: &ServiceSummary) -> String {
        match self {
            Grouping::Flat => summary.id.clone(),
            Grouping::Team => {
                // A service without a team falls back to its domain segment.
                let segment = if summary.team.is_empty() {
                    &summary.domain
                } else {
                    &summary.team
                };
                format!("{}/{}", segment, summary.id)
            }
            Grouping::Domain => format!("{}/{}", summary.domain, summary.id),
        }
    }
}

impl FromStr for Grouping {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "flat" => Ok(Grouping::Flat),
            "team" => Ok(Grouping::Team),
            "domain" => Ok(Grouping::Domain),
            other => Err(format!(
                "Unknown grouping policy `{}` (expected flat, team or domain)",
                other
            )),
        }
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grouping::Flat => "flat",
            Grouping::Team => "team",
            Grouping::Domain => "domain",
        };
        f.write_str(s)
    }
}
