use tracing::{debug, error, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::clients::DishClient;
use crate::domain::{Cart, Order, OrderCreate, OrderId, OrderLine, OrderStatus, User, UserId};
use crate::order_actor::{OrderAction, OrderError};

/// Client for interacting with the order ledger.
///
/// Placing an order is orchestrated here: every cart entry is checked
/// against the catalog before the ledger sees the order.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    dish_client: DishClient,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, dish_client: DishClient) -> Self {
        Self { inner, dish_client }
    }

    /// Turns the cart into a `Pending` order for `customer`.
    ///
    /// Lines are built from the cart's own dish snapshots, so the order total
    /// is always the cart total. The catalog is only consulted to confirm
    /// each dish is still listed at the price the customer saw.
    #[instrument(skip(self, customer, cart), fields(customer_id = %customer.id, items = cart.item_count()))]
    pub async fn place_order(&self, customer: &User, cart: &Cart) -> Result<Order, OrderError> {
        info!("Processing place_order request (Client Side)");
        if cart.is_empty() {
            warn!("Refusing to place an empty cart");
            return Err(OrderError::EmptyCart);
        }

        // Step 1: Check every dish against the catalog
        for item in cart.items() {
            let dish_id = item.dish().id.clone();
            match self.dish_client.get_dish(dish_id.clone()).await {
                Ok(Some(dish)) if dish.price != item.dish().price => {
                    warn!(dish_id = %dish.id, cart_price = %item.dish().price, price = %dish.price, "Dish price changed since it was added");
                    return Err(OrderError::PriceChanged {
                        dish_id,
                        cart_price: item.dish().price,
                        current_price: dish.price,
                    });
                }
                Ok(Some(_)) => {}
                Ok(None) => {
                    error!(dish_id = %dish_id, "Dish no longer on the menu");
                    return Err(OrderError::InvalidDish(dish_id));
                }
                Err(e) => {
                    error!(error = %e, "Dish validation failed");
                    return Err(OrderError::InvalidDish(format!("Dish validation failed: {}", e)));
                }
            }
        }

        // Step 2: Record the order
        let params = OrderCreate {
            customer_id: customer.id.clone(),
            customer_name: customer.display_name.clone(),
            lines: cart.items().iter().map(OrderLine::from).collect(),
        };
        let id = self.inner.create(params).await?;

        let order = self
            .inner
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;
        info!(order_id = order.id, total = %order.total, "Order placed");
        Ok(order)
    }

    /// Moves an order one step along its workflow.
    #[instrument(skip(self))]
    pub async fn advance_order(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        debug!("Sending request");
        self.run_transition(id, OrderAction::Advance).await
    }

    /// Moves an order to `status`, which must be its next step.
    #[instrument(skip(self))]
    pub async fn set_order_status(&self, id: OrderId, status: OrderStatus) -> Result<OrderStatus, OrderError> {
        debug!("Sending request");
        self.run_transition(id, OrderAction::TransitionTo(status)).await
    }

    async fn run_transition(&self, id: OrderId, action: OrderAction) -> Result<OrderStatus, OrderError> {
        match self.inner.perform_action(id, action).await {
            Ok(status) => {
                info!(order_id = id, %status, "Order status changed");
                Ok(status)
            }
            Err(e) => {
                let e = OrderError::from(e);
                warn!(error = %e, "Order status change rejected");
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn orders_for_customer(&self, customer_id: UserId) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        Ok(self.inner.find(move |order: &Order| order.customer_id == customer_id).await?)
    }

    #[instrument(skip(self))]
    pub async fn orders_with_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        Ok(self.inner.find(move |order: &Order| order.status == status).await?)
    }
}

crate::impl_client_methods!(OrderClient, Order, OrderError, order, orders);
