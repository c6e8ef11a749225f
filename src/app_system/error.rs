use thiserror::Error;

use super::ConfigError;
use crate::dish_actor::DishError;
use crate::order_actor::OrderError;
use crate::user_actor::AuthError;

/// Failures while starting, seeding, or stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Seeding failed: {0}")]
    Seed(String),
    #[error(transparent)]
    Dish(#[from] DishError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("Actor task failed: {0}")]
    Shutdown(String),
}
