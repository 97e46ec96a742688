//! Postgres lead store

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};

use super::{LeadStore, NewLead, StoreError, StoredLead};
use crate::config::DatabaseConfig;

/// Lead store over a Postgres connection pool.
///
/// The `leads.email` unique index is the authoritative duplicate guard.
#[derive(Clone)]
pub struct PgLeadStore {
    db: PgPool,
}

impl PgLeadStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Open a pool with the configured limits
    pub async fn connect(url: &str, database: &DatabaseConfig) -> Result<Self, StoreError> {
        let db = PgPoolOptions::new()
            .max_connections(database.max_connections)
            .min_connections(database.min_connections)
            .acquire_timeout(Duration::from_secs(database.acquire_timeout_secs))
            .connect(url)
            .await?;
        Ok(Self::new(db))
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(&self.db)
            .await
            .map_err(|e| StoreError::Query(format!("migration failed: {}", e)))
    }

    /// Remove every lead and restart the id sequence.
    ///
    /// Only the seeding tool calls this.
    pub async fn clear(&self) -> Result<(), StoreError> {
        sqlx::query("TRUNCATE TABLE leads RESTART IDENTITY")
            .execute(&self.db)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl LeadStore for PgLeadStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredLead>, StoreError> {
        let lead = sqlx::query_as::<_, StoredLead>(
            r#"
            SELECT id, name, email, mobile, postcode, services
            FROM leads
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;

        Ok(lead)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<StoredLead>, StoreError> {
        let lead = sqlx::query_as::<_, StoredLead>(
            r#"
            SELECT id, name, email, mobile, postcode, services
            FROM leads
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(lead)
    }

    async fn insert(&self, lead: NewLead) -> Result<StoredLead, StoreError> {
        let services = lead.service_tokens();
        let stored = sqlx::query_as::<_, StoredLead>(
            r#"
            INSERT INTO leads (name, email, mobile, postcode, services)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, mobile, postcode, services
            "#,
        )
        .bind(&lead.name)
        .bind(&lead.email)
        .bind(&lead.mobile)
        .bind(&lead.postcode)
        .bind(services)
        .fetch_one(&self.db)
        .await?;

        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<StoredLead>, StoreError> {
        let leads = sqlx::query_as::<_, StoredLead>(
            r#"
            SELECT id, name, email, mobile, postcode, services
            FROM leads
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(leads)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.db).await?;
        Ok(())
    }
}
