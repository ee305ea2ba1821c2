use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use common::StationInfoDto;
use model::entities::station_info;
use sea_orm::EntityTrait;
use tracing::instrument;

use crate::schemas::{ApiResponse, AppState};

/// Get the station catalog
#[utoipa::path(
    get,
    path = "/api/v1/stations",
    tag = "stations",
    responses(
        (status = 200, description = "Stations retrieved successfully", body = ApiResponse<Vec<StationInfoDto>>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_stations(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<StationInfoDto>>>, StatusCode> {
    let stations = match station_info::Entity::find().all(&state.db).await {
        Ok(stations) => stations,
        Err(_) => return Err(StatusCode::INTERNAL_SERVER_ERROR),
    };

    let data: Vec<StationInfoDto> = stations.into_iter().map(station_to_dto).collect();

    let response = ApiResponse {
        data,
        message: "Stations retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}

/// Get a single station by id
#[utoipa::path(
    get,
    path = "/api/v1/stations/{station_id}",
    tag = "stations",
    params(
        ("station_id" = i32, Path, description = "Station ID"),
    ),
    responses(
        (status = 200, description = "Station retrieved successfully", body = ApiResponse<StationInfoDto>),
        (status = 404, description = "Station not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_station(
    Path(station_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<StationInfoDto>>, StatusCode> {
    let station = match station_info::Entity::find_by_id(station_id).one(&state.db).await {
        Ok(Some(station)) => station,
        Ok(None) => return Err(StatusCode::NOT_FOUND),
        Err(_) => return Err(StatusCode::INTERNAL_SERVER_ERROR),
    };

    let response = ApiResponse {
        data: station_to_dto(station),
        message: "Station retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}

fn station_to_dto(model: station_info::Model) -> StationInfoDto {
    StationInfoDto {
        station_id: model.station_id,
        name: model.name,
        lat: model.lat,
        lon: model.lon,
        altitude: model.altitude,
        capacity: model.capacity,
    }
}
