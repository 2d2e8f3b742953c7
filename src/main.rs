use budget_watch::config::database;
use budget_watch::errors::Result;
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Connect to the store (DATABASE_URL, with a local SQLite fallback)
    let db = database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;

    // 4. Provision tables and the uniqueness indexes alert dedup relies on
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database schema created."))
        .inspect_err(|e| error!("Failed to create database schema: {}", e))?;

    info!("Budget store ready at {}", database::get_database_url());
    Ok(())
}
