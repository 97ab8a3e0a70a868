#[derive(Debug, thiserror::Error)]
pub enum EirgridError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("timestamp parse error: {0}")]
    Timestamp(#[from] chrono::ParseError),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unmapped fuel code: {0}")]
    UnmappedFuelCode(String),
}

pub type Result<T> = std::result::Result<T, EirgridError>;
