//! Lead registration and retrieval service

use std::sync::Arc;

use shared::models::{Lead, RegisterInput, RegisterResponse, Service};

use crate::error::{AppError, AppResult};
use crate::store::{LeadStore, NewLead, StoreError, StoredLead};

/// Lead service enforcing email uniqueness over a [`LeadStore`].
///
/// Holds no state of its own and can be cloned into every request.
#[derive(Clone)]
pub struct LeadService {
    store: Arc<dyn LeadStore>,
}

impl LeadService {
    /// Create a new LeadService instance
    pub fn new(store: Arc<dyn LeadStore>) -> Self {
        Self { store }
    }

    /// Register a new lead.
    ///
    /// The email lookup and the insert are separate store calls, so two
    /// concurrent registrations can both pass the lookup. The store's own
    /// unique constraint decides that race and its error is passed through.
    pub async fn register(&self, input: RegisterInput) -> AppResult<RegisterResponse> {
        if let Some(existing) = self.store.find_by_email(&input.email).await? {
            tracing::warn!(lead_id = existing.id, "Registration rejected: email already exists");
            return Err(AppError::DuplicateEmail {
                email: existing.email,
            });
        }

        let email = input.email.clone();
        let lead = self.store.insert(NewLead::from(input)).await?;

        tracing::info!(lead_id = lead.id, "Lead registered");

        Ok(RegisterResponse::registered(lead.id, email))
    }

    /// Get all leads in store order
    pub async fn get_leads(&self) -> AppResult<Vec<Lead>> {
        let records = self.store.list_all().await?;
        tracing::debug!(count = records.len(), "Fetched leads");

        records
            .into_iter()
            .map(|record| normalize(record).map_err(AppError::from))
            .collect()
    }

    /// Get a lead by id
    pub async fn get_lead(&self, id: i32) -> AppResult<Lead> {
        let record = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(AppError::LeadNotFound { id })?;

        Ok(normalize(record)?)
    }
}

/// Turn a stored record into its domain shape.
///
/// Null services stay null; tokens map element-wise with order kept. An
/// unknown token means the stored data is corrupt.
fn normalize(record: StoredLead) -> Result<Lead, StoreError> {
    let services = match record.services {
        None => None,
        Some(tokens) => Some(
            tokens
                .iter()
                .map(|token| {
                    Service::from_token(token).ok_or_else(|| {
                        tracing::error!(lead_id = record.id, token = %token, "Unknown service token");
                        StoreError::Integrity(format!(
                            "lead {} has unknown service token {:?}",
                            record.id, token
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
        ),
    };

    Ok(Lead {
        id: record.id,
        name: record.name,
        email: record.email,
        mobile: record.mobile,
        postcode: record.postcode,
        services,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Scripted store recording every call it receives
    #[derive(Default)]
    struct FakeStore {
        by_email: Option<StoredLead>,
        by_id: Option<StoredLead>,
        all: Vec<StoredLead>,
        fail_with: Option<&'static str>,
        calls: Mutex<Vec<String>>,
        inserted: Mutex<Vec<NewLead>>,
    }

    impl FakeStore {
        fn record(&self, call: String) -> Result<(), StoreError> {
            self.calls.lock().unwrap().push(call);
            match self.fail_with {
                Some(message) => Err(StoreError::Connection(message.to_string())),
                None => Ok(()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LeadStore for FakeStore {
        async fn find_by_email(&self, email: &str) -> Result<Option<StoredLead>, StoreError> {
            self.record(format!("find_by_email:{}", email))?;
            Ok(self.by_email.clone())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<StoredLead>, StoreError> {
            self.record(format!("find_by_id:{}", id))?;
            Ok(self.by_id.clone())
        }

        async fn insert(&self, lead: NewLead) -> Result<StoredLead, StoreError> {
            self.record("insert".to_string())?;
            let stored = StoredLead {
                id: 4,
                services: Some(lead.service_tokens()),
                name: lead.name.clone(),
                email: lead.email.clone(),
                mobile: lead.mobile.clone(),
                postcode: lead.postcode.clone(),
            };
            self.inserted.lock().unwrap().push(lead);
            Ok(stored)
        }

        async fn list_all(&self) -> Result<Vec<StoredLead>, StoreError> {
            self.record("list_all".to_string())?;
            Ok(self.all.clone())
        }
    }

    fn register_input() -> RegisterInput {
        RegisterInput {
            name: "John Doe".to_string(),
            email: "johndoe@gmail.com".to_string(),
            mobile: "9876".to_string(),
            postcode: "7746".to_string(),
            services: vec![Service::Delivery, Service::Payment],
        }
    }

    fn stored(id: i32, email: &str, services: Option<&[&str]>) -> StoredLead {
        StoredLead {
            id,
            name: "Sophie Taylor".to_string(),
            email: email.to_string(),
            mobile: "0423 789 456".to_string(),
            postcode: "3143".to_string(),
            services: services.map(|s| s.iter().map(|t| t.to_string()).collect()),
        }
    }

    fn service_over(store: FakeStore) -> (LeadService, Arc<FakeStore>) {
        let store = Arc::new(store);
        (LeadService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_register_success() {
        let (service, store) = service_over(FakeStore::default());

        let response = service.register(register_input()).await.unwrap();

        assert_eq!(response, RegisterResponse::registered(4, "johndoe@gmail.com"));
        assert_eq!(
            store.calls(),
            vec!["find_by_email:johndoe@gmail.com".to_string(), "insert".to_string()]
        );
        let inserted = store.inserted.lock().unwrap();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0], NewLead::from(register_input()));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_skips_insert() {
        let (service, store) = service_over(FakeStore {
            by_email: Some(stored(4, "johndoe@gmail.com", Some(&["delivery"]))),
            ..FakeStore::default()
        });

        let err = service.register(register_input()).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::DuplicateEmail { ref email } if email == "johndoe@gmail.com"
        ));
        assert_eq!(err.to_string(), "Email already exists");
        assert_eq!(store.calls(), vec!["find_by_email:johndoe@gmail.com".to_string()]);
        assert!(store.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_propagates_storage_errors() {
        let (service, store) = service_over(FakeStore {
            fail_with: Some("Database connection error"),
            ..FakeStore::default()
        });

        let err = service.register(register_input()).await.unwrap_err();

        assert!(matches!(err, AppError::Storage(StoreError::Connection(_))));
        assert!(err.to_string().contains("Database connection error"));
        assert_eq!(store.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_get_leads_maps_services() {
        let (service, store) = service_over(FakeStore {
            all: vec![
                stored(1, "james.wilson@gmail.com", Some(&["delivery", "payment"])),
                stored(2, "sophie.taylor@outlook.com", Some(&["pick-up", "payment"])),
                stored(
                    3,
                    "liam.nguyen@hotmail.com",
                    Some(&["delivery", "pick-up", "payment"]),
                ),
            ],
            ..FakeStore::default()
        });

        let leads = service.get_leads().await.unwrap();

        assert_eq!(store.calls(), vec!["list_all".to_string()]);
        assert_eq!(leads.len(), 3);
        assert_eq!(
            leads[0].services,
            Some(vec![Service::Delivery, Service::Payment])
        );
        assert_eq!(
            leads[1].services,
            Some(vec![Service::Pickup, Service::Payment])
        );
        assert_eq!(
            leads[2].services,
            Some(vec![Service::Delivery, Service::Pickup, Service::Payment])
        );
        assert_eq!(
            leads.iter().map(|l| l.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[tokio::test]
    async fn test_get_leads_empty() {
        let (service, _) = service_over(FakeStore::default());
        let leads = service.get_leads().await.unwrap();
        assert!(leads.is_empty());
    }

    #[tokio::test]
    async fn test_get_leads_keeps_null_services() {
        let (service, _) = service_over(FakeStore {
            all: vec![stored(3, "test@example.com", None)],
            ..FakeStore::default()
        });

        let leads = service.get_leads().await.unwrap();
        assert_eq!(leads[0].services, None);
    }

    #[tokio::test]
    async fn test_get_leads_keeps_empty_services() {
        let (service, _) = service_over(FakeStore {
            all: vec![stored(3, "test@example.com", Some(&[]))],
            ..FakeStore::default()
        });

        let leads = service.get_leads().await.unwrap();
        assert_eq!(leads[0].services, Some(vec![]));
    }

    #[tokio::test]
    async fn test_get_leads_propagates_storage_errors() {
        let (service, _) = service_over(FakeStore {
            fail_with: Some("Database connection failed"),
            ..FakeStore::default()
        });

        let err = service.get_leads().await.unwrap_err();
        assert!(err.to_string().contains("Database connection failed"));
    }

    #[tokio::test]
    async fn test_get_lead_found() {
        let (service, store) = service_over(FakeStore {
            by_id: Some(stored(2, "sophie.taylor@outlook.com", Some(&["pick-up", "payment"]))),
            ..FakeStore::default()
        });

        let lead = service.get_lead(2).await.unwrap();

        assert_eq!(store.calls(), vec!["find_by_id:2".to_string()]);
        assert_eq!(lead.id, 2);
        assert_eq!(lead.email, "sophie.taylor@outlook.com");
        assert_eq!(lead.services, Some(vec![Service::Pickup, Service::Payment]));
    }

    #[tokio::test]
    async fn test_get_lead_not_found() {
        let (service, store) = service_over(FakeStore::default());

        let err = service.get_lead(999).await.unwrap_err();

        assert!(matches!(err, AppError::LeadNotFound { id: 999 }));
        assert_eq!(err.to_string(), "Lead with id 999 not found");
        assert_eq!(store.calls(), vec!["find_by_id:999".to_string()]);
    }

    #[tokio::test]
    async fn test_get_lead_keeps_null_services() {
        let (service, _) = service_over(FakeStore {
            by_id: Some(stored(2, "sophie.taylor@outlook.com", None)),
            ..FakeStore::default()
        });

        let lead = service.get_lead(2).await.unwrap();
        assert_eq!(lead.services, None);
    }

    #[tokio::test]
    async fn test_get_lead_propagates_storage_errors() {
        let (service, _) = service_over(FakeStore {
            fail_with: Some("Database connection error"),
            ..FakeStore::default()
        });

        let err = service.get_lead(2).await.unwrap_err();
        assert!(matches!(err, AppError::Storage(StoreError::Connection(_))));
    }

    #[tokio::test]
    async fn test_unknown_token_is_integrity_error() {
        let (service, _) = service_over(FakeStore {
            by_id: Some(stored(2, "sophie.taylor@outlook.com", Some(&["pick-up", "catering"]))),
            ..FakeStore::default()
        });

        let err = service.get_lead(2).await.unwrap_err();
        assert!(matches!(err, AppError::Storage(StoreError::Integrity(_))));
        assert!(err.to_string().contains("catering"));
    }
}
