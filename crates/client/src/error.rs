use pyth_sdk::Identifier;

/// Error type for `pyth-receiver-client`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid arguments.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Malformed accumulator update or VAA.
    #[error("decode: {0}")]
    Decode(String),
    /// No delivered update account for the requested feed.
    #[error("no update account for feed {0}")]
    MissingFeed(Identifier),
    /// Base64 decode error.
    #[error("base64-decode: {0}")]
    Base64Decode(#[from] base64::DecodeError),
    /// JSON error.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    /// RPC client error.
    #[error("client: {0}")]
    Client(#[from] Box<solana_client::client_error::ClientError>),
    /// Reqwest error.
    #[error("reqwest: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// Parse url error.
    #[error("parse url: {0}")]
    ParseUrl(#[from] url::ParseError),
    /// SSE error.
    #[error("sse: {0}")]
    Sse(#[from] eventsource_stream::EventStreamError<reqwest::Error>),
    /// Unknown errors.
    #[error("unknown: {0}")]
    Unknown(String),
}

impl Error {
    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl ToString) -> Self {
        Self::InvalidArgument(msg.to_string())
    }

    /// Create a decode error.
    pub fn decode(msg: impl ToString) -> Self {
        Self::Decode(msg.to_string())
    }

    /// Create an unknown error.
    pub fn unknown(msg: impl ToString) -> Self {
        Self::Unknown(msg.to_string())
    }
}

impl From<solana_client::client_error::ClientError> for Error {
    fn from(value: solana_client::client_error::ClientError) -> Self {
        Self::Client(Box::new(value))
    }
}
