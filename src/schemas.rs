use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use common::{
    ForecastPoint, HourlyUsageSample, StationDataPayload, StationInfoDto, StationSample,
};
use moka::future::Cache;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Cache for computed chart payloads
    pub cache: Cache<String, StationDataPayload>,
}

/// Query parameters for the station-data endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct StationDataQuery {
    /// Restrict the payload to a single station
    pub station_id: Option<i32>,
    /// Start of the reporting window (YYYY-MM-DD, inclusive)
    pub start_date: Option<NaiveDate>,
    /// End of the reporting window (YYYY-MM-DD, exclusive)
    pub end_date: Option<NaiveDate>,
}

impl StationDataQuery {
    /// Lower bound of the reporting window, midnight-aligned.
    pub fn start_bound(&self) -> Option<NaiveDateTime> {
        self.start_date.map(|date| date.and_time(NaiveTime::MIN))
    }

    /// Upper (exclusive) bound of the reporting window, midnight-aligned.
    pub fn end_bound(&self) -> Option<NaiveDateTime> {
        self.end_date.map(|date| date.and_time(NaiveTime::MIN))
    }
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::station_data::get_station_data,
        crate::handlers::stations::get_stations,
        crate::handlers::stations::get_station,
    ),
    components(
        schemas(
            ApiResponse<Vec<StationInfoDto>>,
            ApiResponse<StationInfoDto>,
            ErrorResponse,
            HealthResponse,
            StationDataQuery,
            StationDataPayload,
            StationSample,
            HourlyUsageSample,
            ForecastPoint,
            StationInfoDto,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "station-data", description = "Chart payload endpoints"),
        (name = "stations", description = "Station catalog endpoints"),
    ),
    info(
        title = "Bikedash API",
        description = "Bike-share monitoring API serving chart-ready station data",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
