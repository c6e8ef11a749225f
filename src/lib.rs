//! # Restaurant ordering core
//!
//! Dish catalog, customer carts, the order ledger with its status workflow,
//! and a mocked sign-in that hands out role-typed sessions.
//!
//! Each resource (dishes, orders, users) lives in its own actor behind a
//! [`Store`](actor_framework::Store); callers use the cloneable clients in
//! [`clients`]. Carts are plain values owned by a [`CustomerSession`].
//!
//! ```no_run
//! use restaurant_orders::{AppConfig, RestaurantSystem, Session};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let system = RestaurantSystem::start(&AppConfig::default()).await?;
//! if let Session::Customer(mut customer) = system.login("customer", "customer123").await? {
//!     let menu = customer.menu().await?;
//!     customer.add_to_cart(&menu[0]);
//!     let order = customer.place_order().await?;
//!     println!("order #{} is {}", order.id, order.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod dish_actor;
pub mod domain;
pub mod order_actor;
pub mod session;
pub mod user_actor;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

pub use app_system::{setup_tracing, AppConfig, ConfigError, RestaurantSystem, SystemError};
pub use dish_actor::{DishDraft, DishError};
pub use domain::{Cart, CartError, CartItem, Dish, Money, Order, OrderLine, OrderStatus, Role, User};
pub use order_actor::OrderError;
pub use session::{ChefSession, CustomerSession, Session};
pub use user_actor::AuthError;
