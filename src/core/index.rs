//! The intermediate index (`_build/services.json`) is the sole hand-off
//! between the aggregator and the generators. Once written it is the source
//! of truth; when absent, generators fall back to a lossy reconstruction
//! from the registry alone.

use crate::config::registry::Registry;
use crate::domain::model::ServiceSummary;
use crate::utils::error::Result;
use std::path::Path;

/// Write the index, pretty-printed so re-runs are byte-comparable.
pub fn write_services_json(path: &Path, services: &[ServiceSummary]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(services)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn read_services_json(path: &Path) -> Result<Vec<ServiceSummary>> {
    let content = std::fs::read_to_string(path)?;
    let services = serde_json::from_str(&content)?;
    Ok(services)
}

/// Load the index if present, otherwise reconstruct degraded records from
/// the registry. The reconstruction is lossy: the id is derived from each
/// declared docs_path and domain/team/pages are left at defaults.
pub fn load_or_fallback(index_path: &Path, registry: &Registry) -> Result<Vec<ServiceSummary>> {
    if index_path.exists() {
        return read_services_json(index_path);
    }

    tracing::warn!(
        "{} not found; falling back to registry-declared services (domain/team/pages unknown)",
        index_path.display()
    );
    Ok(fallback_from_registry(registry))
}

pub fn fallback_from_registry(registry: &Registry) -> Vec<ServiceSummary> {
    registry
        .repos
        .iter()
        .flat_map(|repo| repo.services.iter())
        .map(|decl| {
            // Collapse path separators so distinct declarations like
            // `a/docs` and `b/docs` yield distinct ids.
            let id = decl
                .docs_path
                .trim_matches('/')
                .replace('/', "-");
            ServiceSummary {
                name: id.clone(),
                id,
                domain: "other".to_string(),
                team: String::new(),
                pages: 0,
                diataxis: vec![],
            }
        })
        .collect()
}
