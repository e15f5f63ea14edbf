//! Outline retrieval errors

/// Errors that can occur while retrieving a document's outline.
#[derive(Debug, thiserror::Error)]
pub enum OutlineFetchError {
    /// The document could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document or its outline is malformed.
    #[error("Malformed outline: {message}")]
    Malformed {
        /// Description of the problem.
        message: String,
    },

    /// The document has an outline this source cannot represent.
    #[error("Unsupported outline: {0}")]
    Unsupported(String),
}

impl OutlineFetchError {
    /// Creates a new malformed-outline error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Creates a new unsupported-outline error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }
}

impl From<serde_json::Error> for OutlineFetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(err.to_string())
    }
}
