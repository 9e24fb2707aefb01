use crate::domain::model::Grouping;
use crate::utils::error::{DocspineError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_rel_path, validate_repo_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level registry: routing policy plus an ordered list of source
/// repositories and the services declared inside each.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    pub routing: RoutingConfig,
    #[serde(default)]
    pub repos: Vec<RepoEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutingConfig {
    #[serde(default)]
    pub group_by: Grouping,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoEntry {
    pub url: String,
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default)]
    pub services: Vec<ServiceDecl>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDecl {
    pub docs_path: String,
}

fn default_branch() -> String {
    "main".to_string()
}

impl RepoEntry {
    /// Filesystem-safe slug derived from the remote URL,
    /// e.g. `https://github.com/acme/commerce-docs.git` -> `commerce-docs`.
    pub fn slug(&self) -> String {
        let trimmed = self.url.trim_end_matches('/');
        let tail = trimmed
            .rsplit(['/', ':'])
            .next()
            .unwrap_or(trimmed);
        tail.strip_suffix(".git").unwrap_or(tail).to_string()
    }
}

impl Registry {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|_| DocspineError::RegistryNotFoundError {
                path: path.display().to_string(),
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| DocspineError::InvalidConfigValueError {
            field: "registry".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.repos.is_empty() {
            return Err(DocspineError::MissingConfigError {
                field: "repos".to_string(),
            });
        }

        for (i, repo) in self.repos.iter().enumerate() {
            validate_repo_url(&format!("repos[{}].url", i), &repo.url)?;
            validate_non_empty_string(&format!("repos[{}].branch", i), &repo.branch)?;
            for (j, svc) in repo.services.iter().enumerate() {
                validate_rel_path(
                    &format!("repos[{}].services[{}].docs_path", i, j),
                    &svc.docs_path,
                )?;
            }
        }

        Ok(())
    }

    /// Total number of declared services across all repositories.
    pub fn service_count(&self) -> usize {
        self.repos.iter().map(|r| r.services.len()).sum()
    }
}

impl Validate for Registry {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

/// Replace `${VAR}` placeholders with environment values; unresolved
/// placeholders are left untouched.
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}
