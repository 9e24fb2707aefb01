use crate::utils::error::{DocspineError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Accepts http(s) git URLs, ssh:// URLs, scp-like `user@host:path` remotes,
/// and absolute local paths (useful for mirrors and tests).
pub fn validate_repo_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(DocspineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "Repository URL cannot be empty".to_string(),
        });
    }

    if url_str.starts_with('/') {
        return Ok(());
    }

    if let Ok(url) = Url::parse(url_str) {
        return match url.scheme() {
            "http" | "https" | "ssh" | "git" | "file" => Ok(()),
            scheme => Err(DocspineError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        };
    }

    // scp-like form: git@github.com:org/repo.git
    if url_str.contains('@') && url_str.contains(':') {
        return Ok(());
    }

    Err(DocspineError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: url_str.to_string(),
        reason: "Not a recognized git remote URL".to_string(),
    })
}

pub fn validate_rel_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DocspineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DocspineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    let escapes = std::path::Path::new(path)
        .components()
        .any(|c| matches!(c, std::path::Component::ParentDir));
    if escapes || path.starts_with('/') {
        return Err(DocspineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path must stay inside the repository checkout".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DocspineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
