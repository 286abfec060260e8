//! Error types

mod api;

pub use api::*;

/// Errors returned by a [`CountrySource`](crate::source::CountrySource).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The REST endpoint could not be reached or answered badly.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Any other source failure.
    #[error("Source error: {0}")]
    Source(String),
}

impl Error {
    /// Creates a generic source error.
    pub fn source_failure(message: impl Into<String>) -> Self {
        Self::Source(message.into())
    }

    /// Returns the API error, if this is one.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}
