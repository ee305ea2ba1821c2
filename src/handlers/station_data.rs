use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use common::{StationDataPayload, StationSample};
use compute::status::load_status_rows;
use tracing::instrument;

use crate::helpers::converters::{forecast_frame_to_points, usage_frame_to_samples};
use crate::schemas::{AppState, ErrorResponse, StationDataQuery};

/// Get the chart payload: availability series, hourly usage, prediction
/// evaluation and forecast in one response.
///
/// The body is served unwrapped; the dashboard consumes it verbatim.
#[utoipa::path(
    get,
    path = "/api/station-data",
    tag = "station-data",
    responses(
        (status = 200, description = "Chart payload computed successfully", body = StationDataPayload),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_station_data(
    Query(query): Query<StationDataQuery>,
    State(state): State<AppState>,
) -> Result<Json<StationDataPayload>, (StatusCode, Json<ErrorResponse>)> {
    // Create cache key
    let cache_key = format!("station_data_{:?}", query);

    // Check cache first
    if let Some(payload) = state.cache.get(&cache_key).await {
        return Ok(Json(payload));
    }

    // Load the raw availability series once; every derived series is
    // computed from the same rows.
    let rows = load_status_rows(
        &state.db,
        query.station_id,
        query.start_bound(),
        query.end_bound(),
    )
    .await
    .map_err(internal_error)?;

    let availability: Vec<StationSample> = rows
        .iter()
        .map(|row| StationSample {
            last_reported: row.last_reported,
            num_bikes_available: row.num_bikes_available,
            num_docks_available: row.num_docks_available,
        })
        .collect();

    let usage_frame = compute::usage::hourly_usage_frame(&rows).map_err(internal_error)?;
    let hourly_usage = usage_frame_to_samples(usage_frame).map_err(internal_error)?;

    let forecast_frame = compute::forecast::forecast_frame(&rows).map_err(internal_error)?;
    let forecast = forecast_frame_to_points(forecast_frame).map_err(internal_error)?;

    let (predictions, actual_values) = compute::predictions::baseline_predictions(&rows);

    let payload = StationDataPayload {
        availability,
        hourly_usage,
        predictions,
        actual_values,
        forecast,
    };

    // Cache the result
    state.cache.insert(cache_key, payload.clone()).await;

    Ok(Json(payload))
}

/// Failures surface as a 500 carrying the raw error message; the dashboard
/// displays it verbatim.
fn internal_error<E: std::fmt::Display>(err: E) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: err.to_string(),
            code: "INTERNAL_ERROR".to_string(),
            success: false,
        }),
    )
}
