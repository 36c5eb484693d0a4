//! Feed-specific error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Feed returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Could not decode feed response: {0}")]
    Decode(String),
}

impl FeedError {
    /// User-friendly message for the error banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Network error. Check your connection.".to_owned(),
            Self::Status(status) => {
                format!("The forecast service responded with HTTP {status}.")
            }
            Self::Decode(_) => "The forecast service sent an unreadable response.".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn user_messages() {
        let err = FeedError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.user_message().contains("500"));

        let err = FeedError::Decode("expected value".into());
        assert!(err.user_message().contains("unreadable"));
    }
}
