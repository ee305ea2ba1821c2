use chrono::NaiveDateTime;
use model::entities::station_status;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::debug;

use crate::error::Result;

/// Loads status rows ordered by reporting time.
///
/// The reporting window is half-open: `start` inclusive, `end` exclusive.
/// Omitted bounds leave that side of the window open.
pub async fn load_status_rows(
    db: &DatabaseConnection,
    station_id: Option<i32>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> Result<Vec<station_status::Model>> {
    let mut query = station_status::Entity::find();

    if let Some(station_id) = station_id {
        query = query.filter(station_status::Column::StationId.eq(station_id));
    }
    if let Some(start) = start {
        query = query.filter(station_status::Column::LastReported.gte(start));
    }
    if let Some(end) = end {
        query = query.filter(station_status::Column::LastReported.lt(end));
    }

    let rows = query
        .order_by_asc(station_status::Column::LastReported)
        .all(db)
        .await?;

    debug!("Loaded {} status rows", rows.len());
    Ok(rows)
}
