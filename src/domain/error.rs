use thiserror::Error;

/// Failure to obtain a remark from the remote service.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("empty response body")]
    EmptyBody,

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

impl TransportError {
    /// Classifies a reqwest failure, splitting timeouts out of the generic case.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Request(err)
        }
    }
}
