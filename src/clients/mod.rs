//! Typed client handles over the resource actors.

#[macro_use]
mod macros;
mod dish_client;
mod order_client;
mod user_client;

pub use dish_client::DishClient;
pub use order_client::OrderClient;
pub use user_client::UserClient;
