//! Domain models for lead registration

mod lead;
mod service;

pub use lead::*;
pub use service::*;
