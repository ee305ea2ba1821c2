use anyhow::Result;
use moka::future::Cache;
use sea_orm::Database;
use std::time::Duration;

use crate::schemas::AppState;

/// Initialize application state for the given database
pub async fn initialize_app_state(database_url: &str) -> Result<AppState> {
    tracing::info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    // Chart payloads are recomputed at most once per minute per query
    let cache = Cache::builder()
        .max_capacity(1000)
        .time_to_live(Duration::from_secs(60))
        .build();

    Ok(AppState { db, cache })
}
