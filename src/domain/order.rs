use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::{CartItem, Dish, Money, UserId};

pub type OrderId = u64;

/// Lifecycle of an order, from placement to hand-over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Order is already {0}")]
    Terminal(OrderStatus),
    #[error("Cannot move order from {from} to {to}")]
    NotNextStep { from: OrderStatus, to: OrderStatus },
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
    ];

    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Completed),
            OrderStatus::Completed => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// One step forward.
    pub fn advance(self) -> Result<OrderStatus, TransitionError> {
        self.next().ok_or(TransitionError::Terminal(self))
    }

    /// Moves to `target`, which must be exactly the next step.
    pub fn transition_to(self, target: OrderStatus) -> Result<OrderStatus, TransitionError> {
        match self.next() {
            Some(next) if next == target => Ok(next),
            Some(_) => Err(TransitionError::NotNextStep { from: self, to: target }),
            None => Err(TransitionError::Terminal(self)),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// A dish snapshot taken when the order was placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub dish: Dish,
    pub quantity: u32,
    pub line_total: Money,
}

impl OrderLine {
    pub fn new(dish: Dish, quantity: u32) -> Self {
        let line_total = dish.price * quantity;
        Self { dish, quantity, line_total }
    }
}

impl From<&CartItem> for OrderLine {
    fn from(item: &CartItem) -> Self {
        OrderLine::new(item.dish().clone(), item.quantity())
    }
}

/// Represents a submitted customer order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: UserId,
    pub customer_name: String,
    pub lines: Vec<OrderLine>,
    pub total: Money,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: UserId,
    pub customer_name: String,
    pub lines: Vec<OrderLine>,
}
