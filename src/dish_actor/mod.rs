//! Catalog entries and the validation behind the dish form.

mod dtos;
pub mod entity;
pub mod error;

pub use dtos::*;
pub use error::*;
