pub mod money;
pub mod dish;
pub mod cart;
pub mod order;
pub mod user;
pub mod catalog;

pub use money::*;
pub use dish::*;
pub use cart::*;
pub use order::*;
pub use user::*;
pub use catalog::ALL_CATEGORIES;
