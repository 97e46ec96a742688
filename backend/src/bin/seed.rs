//! Load the sample leads into Postgres, replacing existing rows

use anyhow::Context;

use leads::store::{LeadStore, NewLead, PgLeadStore};
use leads::{init_tracing, Config};
use shared::fixtures::sample_leads;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing("leads=info,leads_seed=info,sqlx=warn");

    let config = Config::load()?;
    let url = config
        .database
        .url
        .as_deref()
        .context("database.url (LEADS__DATABASE__URL) is required for seeding")?;

    let store = PgLeadStore::connect(url, &config.database).await?;
    if config.should_run_migrations() {
        store.migrate().await?;
    }

    // Clear existing data
    store.clear().await?;

    tracing::info!("Starting to seed the database...");
    for lead in sample_leads() {
        let stored = store
            .insert(NewLead::from(lead))
            .await
            .context("Error during seeding")?;
        tracing::info!("Created lead with ID: {}", stored.id);
    }
    tracing::info!("Seeding completed successfully.");

    Ok(())
}
