use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeoError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("unsupported snapshot format: {0} (expected .toml or .json)")]
    UnsupportedSnapshot(String),

    #[error("snapshot parse error in {path}: {reason}")]
    SnapshotParse { path: String, reason: String },

    #[error("expected a {expected} snapshot in {path}")]
    SnapshotKind {
        path: String,
        expected: &'static str,
    },

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SeoError>;
