use crate::config::ClientConfigError;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Response is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Element not found: <{0}>")]
    ElementNotFound(&'static str),

    #[error("Invalid client configuration: {0}")]
    Config(#[from] ClientConfigError),
}
