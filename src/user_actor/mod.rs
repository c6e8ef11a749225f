//! Static users and the mocked credential check.

pub mod entity;
pub mod error;

pub use entity::UserAction;
pub use error::*;
