//! Record-access boundary for lead persistence
//!
//! Adapters implement [`LeadStore`] and do no business validation; the
//! lead service owns every rule. Records cross this boundary in their
//! persisted shape, with services as raw tokens.

use async_trait::async_trait;
use thiserror::Error;

use shared::models::{RegisterInput, Service};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryLeadStore;
pub use postgres::PgLeadStore;

/// Storage failures raised by lead store adapters
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached
    #[error("lead store connection failed: {0}")]
    Connection(String),

    /// A query or mutation failed during execution
    #[error("lead store query failed: {0}")]
    Query(String),

    /// The store rejected a write that breaks one of its constraints
    #[error("lead store constraint violated: {0}")]
    Constraint(String),

    /// A stored record could not be read back into the domain shape
    #[error("lead store integrity error: {0}")]
    Integrity(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::Constraint(db_err.message().to_string())
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Configuration(_) => StoreError::Connection(err.to_string()),
            _ => StoreError::Query(err.to_string()),
        }
    }
}

/// A lead as the store holds it
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct StoredLead {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub postcode: String,
    /// Service tokens, or `None` when the column is null
    pub services: Option<Vec<String>>,
}

/// Fields for a new lead; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub postcode: String,
    pub services: Vec<Service>,
}

impl NewLead {
    /// Services in their persisted token form
    pub fn service_tokens(&self) -> Vec<String> {
        self.services.iter().map(|s| s.as_str().to_string()).collect()
    }
}

impl From<RegisterInput> for NewLead {
    fn from(input: RegisterInput) -> Self {
        Self {
            name: input.name,
            email: input.email,
            mobile: input.mobile,
            postcode: input.postcode,
            services: input.services,
        }
    }
}

#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Exact-match lookup by email
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredLead>, StoreError>;

    /// Exact-match lookup by primary key
    async fn find_by_id(&self, id: i32) -> Result<Option<StoredLead>, StoreError>;

    /// Create a record and return it with store-assigned fields
    async fn insert(&self, lead: NewLead) -> Result<StoredLead, StoreError>;

    /// Every stored record, in insertion order
    async fn list_all(&self) -> Result<Vec<StoredLead>, StoreError>;

    /// Check that the store is reachable
    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
