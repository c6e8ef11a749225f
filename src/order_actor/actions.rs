use crate::domain::OrderStatus;

/// Custom actions for Order entities.
///
/// Both variants return the status the order ended up in.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order one step along the workflow.
    Advance,
    /// Moves the order to the given status, which must be the next step.
    ///
    /// # Errors
    /// Will fail when the target skips a step, goes backward, or the order is
    /// already completed.
    TransitionTo(OrderStatus),
}
