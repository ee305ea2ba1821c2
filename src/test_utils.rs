#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use chrono::NaiveDate;
    use migration::{Migrator, MigratorTrait};
    use moka::future::Cache;
    use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Create AppState for testing
    pub async fn setup_test_app_state() -> AppState {
        let db = setup_test_db().await;
        let cache = Cache::new(100);

        AppState { db, cache }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr) // Output to stderr, which is captured by tests
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub async fn setup_test_app() -> Router {
        let _ = init_test_tracing();

        let state = setup_test_app_state().await;
        create_router(state)
    }

    /// Insert one catalog entry.
    pub async fn seed_station(db: &DatabaseConnection, station_id: i32, name: &str) {
        let station = model::entities::station_info::ActiveModel {
            station_id: Set(station_id),
            name: Set(name.to_string()),
            lat: Set(41.3851),
            lon: Set(2.1734),
            altitude: Set(Some(12.0)),
            capacity: Set(Some(20)),
        };
        station
            .insert(db)
            .await
            .expect("Failed to insert station info");
    }

    /// Insert one status reading. `(station_id, day, hour)` must be unique
    /// per test database because of the status unique index.
    pub async fn seed_status_row(
        db: &DatabaseConnection,
        station_id: i32,
        day: u32,
        hour: u32,
        bikes: i32,
        docks: i32,
    ) {
        let row = model::entities::station_status::ActiveModel {
            station_id: Set(station_id),
            last_reported: Set(NaiveDate::from_ymd_opt(2024, 9, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap()),
            num_bikes_available: Set(bikes),
            num_docks_available: Set(docks),
            mechanical: Set(bikes),
            ebike: Set(0),
            capacity: Set(bikes + docks),
            ..Default::default()
        };
        row.insert(db).await.expect("Failed to insert status row");
    }
}
