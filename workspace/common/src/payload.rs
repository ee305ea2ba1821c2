use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One availability reading of a station at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct StationSample {
    /// Reporting time of the sample
    pub last_reported: NaiveDateTime,
    /// Bikes available at that time (non-negative)
    pub num_bikes_available: i32,
    /// Docks available at that time (non-negative)
    pub num_docks_available: i32,
}

/// Mean bikes available for one hour-of-day bucket.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HourlyUsageSample {
    /// Hour of day, 0-23
    pub hour: u32,
    /// Mean bikes available over all samples in the bucket
    pub num_bikes_available: f64,
}

/// A predicted-vs-observed pair for one time slot.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastPoint {
    /// Start of the hourly slot
    pub timestamp: NaiveDateTime,
    /// Model prediction for the slot
    pub predicted: f64,
    /// Observed value for the slot
    pub actual: f64,
}

/// One slice of the prediction-accuracy pie chart.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct AccuracyBucket {
    /// Bucket label, "Accurate" or "Inaccurate"
    pub name: String,
    /// Number of predictions classified into the bucket
    pub value: u64,
}

impl AccuracyBucket {
    pub fn accurate(value: u64) -> Self {
        Self {
            name: "Accurate".to_string(),
            value,
        }
    }

    pub fn inaccurate(value: u64) -> Self {
        Self {
            name: "Inaccurate".to_string(),
            value,
        }
    }
}

/// The full chart payload served by `/api/station-data`.
///
/// Every field decodes to empty when absent; the dashboard degrades the
/// affected chart instead of failing the whole view.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StationDataPayload {
    /// Chronological availability series
    #[serde(default)]
    pub availability: Vec<StationSample>,
    /// Mean bikes available per hour of day, ascending hours
    #[serde(default)]
    pub hourly_usage: Vec<HourlyUsageSample>,
    /// Model predictions over the evaluation window
    #[serde(default)]
    pub predictions: Vec<f64>,
    /// Observed values aligned index-for-index with `predictions`
    #[serde(default)]
    pub actual_values: Vec<f64>,
    /// Predicted-vs-observed forecast series
    #[serde(default)]
    pub forecast: Vec<ForecastPoint>,
}
