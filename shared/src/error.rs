use thiserror::Error;

use crate::capabilities::EndpointError;

/// Why a load or submit round-trip did not complete.
///
/// None of these reach the user verbatim: the screen shows one generic
/// message per operation and the detail goes to the log.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("endpoint error: {0}")]
    Endpoint(#[from] EndpointError),

    #[error("screen has not been activated with an API base URL")]
    NotConfigured,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("response carried no body")]
    EmptyBody,

    #[error("could not encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SyncError {
    pub fn transport(error: impl std::fmt::Display) -> Self {
        Self::Transport(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_errors_convert() {
        let error: SyncError = EndpointError::Empty.into();
        assert!(matches!(error, SyncError::Endpoint(EndpointError::Empty)));
        assert_eq!(error.to_string(), "endpoint error: API base URL is empty");
    }
}
