use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::{debug, info, trace, warn};

use model::entities::{station_info, station_status};

/// Feed envelope: `{"data": {"stations": [...]}}`.
#[derive(Debug, Deserialize)]
struct FeedEnvelope<T> {
    data: FeedData<T>,
}

#[derive(Debug, Deserialize)]
struct FeedData<T> {
    stations: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct FeedStatus {
    station_id: i32,
    num_bikes_available: i32,
    num_docks_available: i32,
    #[serde(default)]
    num_bikes_available_types: FeedBikeTypes,
    /// Unix seconds.
    last_reported: i64,
}

#[derive(Debug, Default, Deserialize)]
struct FeedBikeTypes {
    #[serde(default)]
    mechanical: i32,
    #[serde(default)]
    ebike: i32,
}

#[derive(Debug, Deserialize)]
struct FeedInfo {
    station_id: i32,
    name: String,
    lat: f64,
    lon: f64,
    altitude: Option<f64>,
    capacity: Option<i32>,
}

pub async fn fetch_feed(status_url: &str, info_url: &str, database_url: &str) -> Result<()> {
    trace!("Entering fetch_feed function");
    info!("Fetching station feeds");
    debug!("Status feed: {}", status_url);
    debug!("Info feed: {}", info_url);

    let client = reqwest::Client::new();

    let status_feed: FeedEnvelope<FeedStatus> = client
        .get(status_url)
        .send()
        .await
        .context("Status feed request failed")?
        .error_for_status()
        .context("Status feed returned an error")?
        .json()
        .await
        .context("Failed to parse status feed")?;

    let info_feed: FeedEnvelope<FeedInfo> = client
        .get(info_url)
        .send()
        .await
        .context("Info feed request failed")?
        .error_for_status()
        .context("Info feed returned an error")?
        .json()
        .await
        .context("Failed to parse info feed")?;

    info!(
        "Fetched {} status rows and {} station records",
        status_feed.data.stations.len(),
        info_feed.data.stations.len()
    );

    let db = Database::connect(database_url)
        .await
        .context("Failed to connect to database")?;

    upsert_station_info(&db, &info_feed.data.stations).await?;
    let stored = store_status_rows(&db, &status_feed.data.stations, &info_feed.data.stations).await?;

    info!("Stored {} new status rows", stored);
    Ok(())
}

async fn upsert_station_info(db: &DatabaseConnection, stations: &[FeedInfo]) -> Result<()> {
    for station in stations {
        let existing = station_info::Entity::find_by_id(station.station_id)
            .one(db)
            .await?;

        let active = station_info::ActiveModel {
            station_id: Set(station.station_id),
            name: Set(station.name.clone()),
            lat: Set(station.lat),
            lon: Set(station.lon),
            altitude: Set(station.altitude),
            capacity: Set(station.capacity),
        };

        if existing.is_some() {
            active.update(db).await?;
        } else {
            active.insert(db).await?;
        }
    }

    debug!("Upserted {} station records", stations.len());
    Ok(())
}

/// Stores status rows joined against the info feed on `station_id`; rows for
/// stations missing from the catalog or already stored are skipped.
async fn store_status_rows(
    db: &DatabaseConnection,
    rows: &[FeedStatus],
    stations: &[FeedInfo],
) -> Result<usize> {
    let known_stations: HashSet<i32> = stations.iter().map(|s| s.station_id).collect();

    let mut stored = 0usize;
    for row in rows {
        if !known_stations.contains(&row.station_id) {
            warn!("Skipping status for unknown station {}", row.station_id);
            continue;
        }

        let last_reported = match chrono::DateTime::from_timestamp(row.last_reported, 0) {
            Some(dt) => dt.naive_utc(),
            None => {
                warn!(
                    "Skipping status for station {}: timestamp out of range: {}",
                    row.station_id, row.last_reported
                );
                continue;
            }
        };

        let already_stored = station_status::Entity::find()
            .filter(station_status::Column::StationId.eq(row.station_id))
            .filter(station_status::Column::LastReported.eq(last_reported))
            .one(db)
            .await?
            .is_some();
        if already_stored {
            trace!(
                "Station {} already has a reading at {}",
                row.station_id, last_reported
            );
            continue;
        }

        let active = station_status::ActiveModel {
            station_id: Set(row.station_id),
            last_reported: Set(last_reported),
            num_bikes_available: Set(row.num_bikes_available),
            num_docks_available: Set(row.num_docks_available),
            mechanical: Set(row.num_bikes_available_types.mechanical),
            ebike: Set(row.num_bikes_available_types.ebike),
            capacity: Set(row.num_bikes_available + row.num_docks_available),
            ..Default::default()
        };
        active.insert(db).await?;
        stored += 1;
    }

    Ok(stored)
}
