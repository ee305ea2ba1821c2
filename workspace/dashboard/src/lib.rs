//! Dashboard client for the bikedash API: fetches the chart payload once,
//! folds the outcome into an explicit presentation state, derives the four
//! chart series and renders them as a terminal summary.

pub mod charts;
pub mod client;
pub mod render;
pub mod state;

pub use charts::{prediction_accuracy, ChartData, ACCURACY_TOLERANCE};
pub use client::{fetch_station_data, FetchError};
pub use state::FetchState;
