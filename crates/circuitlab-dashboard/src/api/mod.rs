//! API endpoint handlers.

pub mod catalog;
pub mod circuit;
pub mod health;
pub mod simulate;
