use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, Database, Set};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use tracing::{info, warn};

use model::entities::station_status;

/// One raw record from a status dump. Fields arrive as JSON numbers or are
/// missing entirely; a record missing any required field fails as a whole.
#[derive(Debug, Deserialize)]
struct RawStatusRecord {
    station_id: Option<i32>,
    num_bikes_available: Option<i32>,
    num_docks_available: Option<i32>,
    #[serde(default)]
    num_bikes_available_types: RawBikeTypes,
    last_reported: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawBikeTypes {
    #[serde(default)]
    mechanical: i32,
    #[serde(default)]
    ebike: i32,
}

pub async fn import_status(json_path: &str, database_url: &str) -> Result<()> {
    info!("Importing station status dump from {}", json_path);

    let file = File::open(Path::new(json_path))
        .with_context(|| format!("Failed to open dump file: {}", json_path))?;
    let records: Vec<RawStatusRecord> =
        serde_json::from_reader(file).context("Failed to parse status dump")?;
    info!("Parsed {} raw records", records.len());

    let db = Database::connect(database_url)
        .await
        .context("Failed to connect to database")?;

    let mut imported = 0usize;
    let mut skipped = 0usize;
    for record in records {
        let active = match to_active_model(&record) {
            Ok(active) => active,
            Err(reason) => {
                warn!("Skipping record: {}", reason);
                skipped += 1;
                continue;
            }
        };

        // Duplicate (station_id, last_reported) rows trip the unique index;
        // treat them like any other unusable record.
        match active.insert(&db).await {
            Ok(_) => imported += 1,
            Err(e) => {
                warn!("Skipping record: insert failed: {}", e);
                skipped += 1;
            }
        }
    }

    info!("Imported {} status rows ({} skipped)", imported, skipped);
    Ok(())
}

fn to_active_model(
    record: &RawStatusRecord,
) -> std::result::Result<station_status::ActiveModel, String> {
    let station_id = record.station_id.ok_or("missing station_id")?;
    let bikes = record
        .num_bikes_available
        .ok_or_else(|| format!("missing num_bikes_available for station {}", station_id))?;
    let docks = record
        .num_docks_available
        .ok_or_else(|| format!("missing num_docks_available for station {}", station_id))?;
    let raw_timestamp = record
        .last_reported
        .as_deref()
        .ok_or_else(|| format!("missing last_reported for station {}", station_id))?;
    let last_reported = parse_timestamp(raw_timestamp)?;

    if bikes < 0 || docks < 0 {
        return Err(format!("negative availability for station {}", station_id));
    }

    Ok(station_status::ActiveModel {
        station_id: Set(station_id),
        last_reported: Set(last_reported),
        num_bikes_available: Set(bikes),
        num_docks_available: Set(docks),
        mechanical: Set(record.num_bikes_available_types.mechanical),
        ebike: Set(record.num_bikes_available_types.ebike),
        capacity: Set(bikes + docks),
        ..Default::default()
    })
}

/// Dumps carry either unix seconds or ISO-8601-ish local timestamps.
fn parse_timestamp(raw: &str) -> std::result::Result<NaiveDateTime, String> {
    if let Ok(seconds) = raw.parse::<i64>() {
        return chrono::DateTime::from_timestamp(seconds, 0)
            .map(|dt| dt.naive_utc())
            .ok_or_else(|| format!("timestamp out of range: {}", raw));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .map_err(|e| format!("unparseable last_reported '{}': {}", raw, e))
}
