//! Business logic services for lead registration

pub mod lead;

pub use lead::LeadService;
