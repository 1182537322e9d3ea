//! Error types

mod transport;
mod validation;

pub use transport::*;
pub use validation::*;

/// Top-level error for session operations.
///
/// No variant is fatal to a [`Session`](crate::session::Session): every error
/// is recovered at the boundary of the operation that raised it, and the user
/// may navigate or bulk select again afterwards.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A page fetch failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// User input was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Returns `true` if this is a rejected bulk selection count.
    pub fn is_invalid_count(&self) -> bool {
        matches!(self, Self::Validation(ValidationError::InvalidCount { .. }))
    }

    /// Returns the transport error, if this is one.
    pub fn as_transport(&self) -> Option<&TransportError> {
        match self {
            Self::Transport(e) => Some(e),
            _ => None,
        }
    }
}
