//! HTTP request handlers

pub mod health;
pub mod lead;

pub use health::health_check;
pub use lead::{get_lead, list_leads, register_lead};
