//! In-process lead store for development runs and tests

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{LeadStore, NewLead, StoreError, StoredLead};

/// Lead store backed by a vector behind a lock.
///
/// Ids start at 1 and increase by one per insert. Email uniqueness is
/// enforced on insert, the same way the Postgres unique index does.
#[derive(Debug, Default)]
pub struct InMemoryLeadStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    leads: Vec<StoredLead>,
    last_id: i32,
}

impl InMemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing records, as if they had been stored earlier.
    ///
    /// Records are kept as given, including null or unrecognised service
    /// tokens.
    pub fn with_records(records: Vec<StoredLead>) -> Self {
        let last_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        Self {
            inner: RwLock::new(Inner {
                leads: records,
                last_id,
            }),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.leads.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.leads.is_empty()
    }
}

#[async_trait]
impl LeadStore for InMemoryLeadStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredLead>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.leads.iter().find(|l| l.email == email).cloned())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<StoredLead>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.leads.iter().find(|l| l.id == id).cloned())
    }

    async fn insert(&self, lead: NewLead) -> Result<StoredLead, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.leads.iter().any(|l| l.email == lead.email) {
            return Err(StoreError::Constraint(format!(
                "duplicate key value violates unique constraint on email: {}",
                lead.email
            )));
        }

        inner.last_id += 1;
        let stored = StoredLead {
            id: inner.last_id,
            services: Some(lead.service_tokens()),
            name: lead.name,
            email: lead.email,
            mobile: lead.mobile,
            postcode: lead.postcode,
        };
        inner.leads.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<StoredLead>, StoreError> {
        Ok(self.inner.read().await.leads.clone())
    }
}
