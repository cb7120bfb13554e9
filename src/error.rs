use thiserror::Error;

/// Why a single URL did not produce a saved image.
///
/// Duplicates are not errors; see [`crate::Outcome::Duplicate`].
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{0}")]
    Network(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("failed to read response body: {0}")]
    InvalidBody(String),

    #[error("unsafe content type: {0:?}")]
    UnsafeContentType(Option<String>),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FetchError {
    /// True for failures of the request itself: bad URL, transport, non-2xx, unreadable body.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            FetchError::InvalidUrl(_)
                | FetchError::Network(_)
                | FetchError::Status(_)
                | FetchError::InvalidBody(_)
        )
    }
}
