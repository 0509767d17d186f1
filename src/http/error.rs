use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("ListenBrainz returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Invalid API url: {0}")]
    InvalidUrl(String),

    #[error("No user token configured")]
    MissingToken,

    #[error("Listen has no recording id")]
    MissingRecordingId,

    #[error("Listen has no MusicBrainz recording id")]
    MissingRecordingMbid,
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::Status {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
