use thiserror::Error;

/// Failures talking to the content API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to content API failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("content API returned errors: {0}")]
    GraphQl(String),

    #[error("content API response had no data")]
    MissingData,

    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
