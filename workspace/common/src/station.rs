use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Station catalog entry (mirrors the backend StationInfo response).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct StationInfoDto {
    pub station_id: i32,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub altitude: Option<f64>,
    pub capacity: Option<i32>,
}
