//! The order ledger entity and its status workflow actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
