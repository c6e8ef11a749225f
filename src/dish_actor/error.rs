use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::MoneyError;

/// Errors that can occur during dish operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DishError {
    #[error("Dish not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] MoneyError),
    #[error("Store error: {0}")]
    StoreError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<DishError>> for DishError {
    fn from(e: FrameworkError<DishError>) -> Self {
        match e {
            FrameworkError::NotFound(id) => DishError::NotFound(id),
            FrameworkError::Entity(e) => e,
            FrameworkError::Store(e) => DishError::StoreError(e.to_string()),
            e @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                DishError::ActorCommunicationError(e.to_string())
            }
        }
    }
}
