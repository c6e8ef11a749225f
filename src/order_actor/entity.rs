use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{Money, Order, OrderCreate, OrderId, OrderStatus};
use super::{OrderAction, OrderError};

impl Entity for Order {
    type Id = OrderId;
    type CreateParams = OrderCreate;
    type Patch = (); // Orders are immutable apart from their status
    type Action = OrderAction;
    type ActionResult = OrderStatus;
    type Error = OrderError;

    fn id(&self) -> &OrderId { &self.id }

    /// Creates a new Order from creation parameters.
    ///
    /// # Notes
    /// The order starts `Pending`, stamped with the current time. The total
    /// is computed here from the line snapshots, never taken from the caller.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.lines.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        if let Some(line) = params.lines.iter().find(|line| line.quantity == 0) {
            return Err(OrderError::InvalidDish(format!("{} has quantity 0", line.dish.id)));
        }
        let total: Money = params.lines.iter().map(|line| line.line_total).sum();

        Ok(Self {
            id,
            customer_id: params.customer_id,
            customer_name: params.customer_name,
            lines: params.lines,
            total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), OrderError> {
        Ok(())
    }

    /// Handles status workflow actions.
    ///
    /// # Errors
    /// Returns `InvalidTransition` for anything but a single forward step.
    fn handle_action(&mut self, action: OrderAction) -> Result<OrderStatus, OrderError> {
        let next = match action {
            OrderAction::Advance => self.status.advance(),
            OrderAction::TransitionTo(target) => self.status.transition_to(target),
        }
        .map_err(|source| OrderError::InvalidTransition { id: self.id, source })?;

        self.status = next;
        Ok(next)
    }
}
