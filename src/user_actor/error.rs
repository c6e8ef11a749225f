use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur while signing in.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("Please enter username and password.")]
    MissingCredentials,
    /// Unknown username or wrong password; the two are not told apart.
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("User store error: {0}")]
    StoreError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<AuthError>> for AuthError {
    fn from(e: FrameworkError<AuthError>) -> Self {
        match e {
            FrameworkError::NotFound(_) => AuthError::InvalidCredentials,
            FrameworkError::Entity(e) => e,
            FrameworkError::Store(e) => AuthError::StoreError(e.to_string()),
            e @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                AuthError::ActorCommunicationError(e.to_string())
            }
        }
    }
}
