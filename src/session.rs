//! Role-typed handles returned by login.
//!
//! The role is matched once, when the session is built; each variant only
//! exposes what that role may do.

use tracing::info;

use crate::clients::{DishClient, OrderClient};
use crate::dish_actor::{DishDraft, DishError};
use crate::domain::{Cart, CartError, Dish, DishId, Money, Order, OrderId, OrderStatus, Role, User};
use crate::order_actor::OrderError;

/// A signed-in user, obtainable only through `RestaurantSystem::login`.
///
/// ```compile_fail
/// use restaurant_orders::clients::{DishClient, OrderClient};
/// use restaurant_orders::{Session, User};
///
/// fn impersonate(user: User, dishes: DishClient, orders: OrderClient) -> Session {
///     Session::start(user, dishes, orders)
/// }
/// ```
pub enum Session {
    Chef(ChefSession),
    Customer(CustomerSession),
}

impl Session {
    /// Only `RestaurantSystem::login` builds sessions, after the credential
    /// check has passed.
    pub(crate) fn start(user: User, dishes: DishClient, orders: OrderClient) -> Self {
        info!(user_id = %user.id, role = ?user.role, "Session started");
        match user.role {
            Role::Chef => Session::Chef(ChefSession { user, dishes, orders }),
            Role::Customer => Session::Customer(CustomerSession {
                user,
                cart: Cart::new(),
                dishes,
                orders,
            }),
        }
    }

    pub fn user(&self) -> &User {
        match self {
            Session::Chef(session) => &session.user,
            Session::Customer(session) => &session.user,
        }
    }

    pub fn role(&self) -> Role {
        self.user().role
    }

    /// Ends the session. A customer's cart is discarded with it.
    pub fn logout(self) -> User {
        match self {
            Session::Chef(session) => session.logout(),
            Session::Customer(session) => session.logout(),
        }
    }
}

/// Menu browsing, the cart, and the customer's own orders.
pub struct CustomerSession {
    user: User,
    cart: Cart,
    dishes: DishClient,
    orders: OrderClient,
}

impl CustomerSession {
    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub async fn menu(&self) -> Result<Vec<Dish>, DishError> {
        self.dishes.list_dishes().await
    }

    pub async fn menu_by_category(&self, category: &str) -> Result<Vec<Dish>, DishError> {
        self.dishes.dishes_by_category(category.to_string()).await
    }

    pub async fn categories(&self) -> Result<Vec<String>, DishError> {
        self.dishes.categories().await
    }

    pub fn add_to_cart(&mut self, dish: &Dish) -> &Cart {
        self.cart = self.cart.add_item(dish);
        &self.cart
    }

    pub fn set_quantity(&mut self, dish_id: &str, quantity: u32) -> Result<&Cart, CartError> {
        self.cart = self.cart.set_quantity(dish_id, quantity)?;
        Ok(&self.cart)
    }

    /// Submits the cart. On success the cart starts over empty; on failure
    /// it is kept as it was.
    pub async fn place_order(&mut self) -> Result<Order, OrderError> {
        let order = self.orders.place_order(&self.user, &self.cart).await?;
        self.cart = Cart::new();
        Ok(order)
    }

    pub async fn my_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.orders.orders_for_customer(self.user.id.clone()).await
    }

    pub fn logout(self) -> User {
        info!(user_id = %self.user.id, items_dropped = self.cart.item_count(), "Customer signed out");
        self.user
    }
}

/// Dish management and the kitchen's view of the order ledger.
pub struct ChefSession {
    user: User,
    dishes: DishClient,
    orders: OrderClient,
}

impl ChefSession {
    pub fn user(&self) -> &User {
        &self.user
    }

    pub async fn dishes(&self) -> Result<Vec<Dish>, DishError> {
        self.dishes.list_dishes().await
    }

    pub async fn add_dish(&self, draft: DishDraft) -> Result<DishId, DishError> {
        self.dishes.add_dish(draft).await
    }

    pub async fn update_dish(&self, id: &str, draft: DishDraft) -> Result<Dish, DishError> {
        self.dishes.update_dish(id.to_string(), draft).await
    }

    pub async fn delete_dish(&self, id: &str) -> Result<(), DishError> {
        self.dishes.delete_dish(id.to_string()).await
    }

    pub async fn average_price(&self, category: &str) -> Result<Money, DishError> {
        self.dishes.average_price(category.to_string()).await
    }

    pub async fn orders(&self) -> Result<Vec<Order>, OrderError> {
        self.orders.list_orders().await
    }

    pub async fn orders_with_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        self.orders.orders_with_status(status).await
    }

    pub async fn advance_order(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.orders.advance_order(id).await
    }

    pub async fn set_order_status(&self, id: OrderId, status: OrderStatus) -> Result<OrderStatus, OrderError> {
        self.orders.set_order_status(id, status).await
    }

    pub fn logout(self) -> User {
        info!(user_id = %self.user.id, "Chef signed out");
        self.user
    }
}
