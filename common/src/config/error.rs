use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),
    #[error("failed to deserialize: {0}")]
    Deserialize(#[source] serde_yaml_ng::Error),
    #[error("validation error: {0}")]
    Validation(String),
}
