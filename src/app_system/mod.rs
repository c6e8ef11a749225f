//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod error;
pub mod restaurant_system;
pub(crate) mod seed;
pub mod telemetry;

pub use config::*;
pub use error::*;
pub use restaurant_system::*;
pub use telemetry::*;
