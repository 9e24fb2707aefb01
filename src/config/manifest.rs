use crate::domain::model::{DiataxisTag, ServiceSummary};
use crate::utils::error::{DocspineError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-service build/metadata descriptor, read from `docspine.toml` at the
/// service root inside a cloned repository. Every field is optional; defaults
/// are applied when normalizing into a [`ServiceSummary`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceManifest {
    pub service: Option<String>,
    pub nav_title: Option<String>,
    pub domain: Option<String>,
    pub team: Option<String>,
    pub pages: Option<u32>,
    pub diataxis: Option<Vec<DiataxisTag>>,
    pub build_command: Option<String>,
    pub output_dir: Option<String>,
}

impl ServiceManifest {
    pub const FILE_NAME: &'static str = "docspine.toml";

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|_| DocspineError::ManifestNotFoundError {
                path: path.display().to_string(),
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DocspineError::InvalidConfigValueError {
            field: "manifest".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// The build command run in the service root. Defaults to the
    /// conventional `just docs-build` recipe.
    pub fn command(&self) -> &str {
        self.build_command.as_deref().unwrap_or("just docs-build")
    }

    /// Build output directory relative to the service root, trailing
    /// slash stripped.
    pub fn resolved_output_dir(&self) -> &str {
        self.output_dir
            .as_deref()
            .unwrap_or("site")
            .trim_end_matches('/')
    }

    /// Normalize into the record carried between stages. `docs_path` is the
    /// registry-declared sub-path, used as the id of last resort.
    pub fn to_summary(&self, docs_path: &str) -> ServiceSummary {
        let id = self
            .service
            .clone()
            .unwrap_or_else(|| docs_path.to_string());
        let name = self.nav_title.clone().unwrap_or_else(|| id.clone());
        ServiceSummary {
            id,
            name,
            domain: self.domain.clone().unwrap_or_else(|| "other".to_string()),
            team: self.team.clone().unwrap_or_default(),
            pages: self.pages.unwrap_or(0),
            diataxis: self.diataxis.clone().unwrap_or_default(),
        }
    }
}
