use thiserror::Error;

pub type Result<T> = std::result::Result<T, DoctorError>;

/// Failures of the command-line surface. The engine itself never fails.
#[derive(Error, Debug)]
pub enum DoctorError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Config {
        path: String,
        source: toml::de::Error,
    },

    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no logline provided (pass it as arguments or on stdin)")]
    EmptyInput,
}
