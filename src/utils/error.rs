use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocspineError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Registry file not found: {path}")]
    RegistryNotFoundError { path: String },

    #[error("Service manifest not found: {path}")]
    ManifestNotFoundError { path: String },

    #[error("Duplicate service id across registry: {id}")]
    DuplicateServiceError { id: String },

    #[error("Command `{command}` failed with exit code {code}")]
    CommandFailedError { command: String, code: i32 },

    #[error("Build output directory missing: {path}")]
    OutputDirMissingError { path: String },
}

impl DocspineError {
    /// Exit code the process should terminate with.
    ///
    /// External command failures forward the command's own exit code;
    /// everything else is a plain failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            DocspineError::CommandFailedError { code, .. } => *code,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, DocspineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failure_forwards_exit_code() {
        let err = DocspineError::CommandFailedError {
            command: "just docs-build".to_string(),
            code: 42,
        };
        assert_eq!(err.exit_code(), 42);
    }

    #[test]
    fn other_errors_exit_with_one() {
        let err = DocspineError::MissingConfigError {
            field: "repos".to_string(),
        };
        assert_eq!(err.exit_code(), 1);
    }
}
