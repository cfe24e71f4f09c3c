use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Endpoint returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Malformed endpoint response: {0}")]
    MalformedResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn malformed_response(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }
}
