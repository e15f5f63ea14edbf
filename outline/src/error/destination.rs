//! Destination resolution errors

/// Errors that can occur while resolving an entry's destination.
#[derive(Debug, thiserror::Error)]
pub enum DestinationResolutionError {
    /// The reference has a shape the source does not understand.
    #[error("Invalid destination: {0}")]
    Invalid(String),

    /// The reference is well-formed but points nowhere in this document.
    #[error("Unresolvable destination: {reference}")]
    Unresolvable {
        /// Printable form of the reference.
        reference: String,
    },

    /// The document could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DestinationResolutionError {
    /// Creates a new invalid-reference error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    /// Creates a new unresolvable-reference error.
    pub fn unresolvable(reference: impl Into<String>) -> Self {
        Self::Unresolvable {
            reference: reference.into(),
        }
    }
}
