use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ClientError {
    #[error("invalid api url: {0}")]
    InvalidUrl(String),
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("analysis failed: {status} from {endpoint}")]
    Status { status: u16, endpoint: String },
    #[error("invalid response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            ClientError::InvalidUrl(_) => "invalid_url",
            ClientError::Transport { .. } => "transport",
            ClientError::Status { .. } => "status",
            ClientError::Decode { .. } => "decode",
        }
    }
}
