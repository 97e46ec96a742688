//! Shared types and models for lead registration
//!
//! This crate contains types shared between the backend, browser clients
//! (via WASM), and the seeding tools.

pub mod fixtures;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
