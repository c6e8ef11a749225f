use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::{DishId, Money, OrderId, TransitionError};

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,
    #[error("Invalid dish: {0}")]
    InvalidDish(String),
    #[error("Price of {dish_id} changed from {cart_price} to {current_price}; review the cart")]
    PriceChanged {
        dish_id: DishId,
        cart_price: Money,
        current_price: Money,
    },
    #[error("Order {id}: {source}")]
    InvalidTransition {
        id: OrderId,
        #[source]
        source: TransitionError,
    },
    #[error("Order store error: {0}")]
    StoreError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<OrderError>> for OrderError {
    fn from(e: FrameworkError<OrderError>) -> Self {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::Entity(e) => e,
            FrameworkError::Store(e) => OrderError::StoreError(e.to_string()),
            e @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                OrderError::ActorCommunicationError(e.to_string())
            }
        }
    }
}
