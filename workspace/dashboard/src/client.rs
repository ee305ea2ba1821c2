use common::StationDataPayload;
use thiserror::Error;
use tracing::{debug, error, info};

/// Failures of the one-shot station-data fetch. Every variant collapses
/// into `FetchState::Error` with its display string; the empty-body case
/// deliberately reads as the generic no-data message.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No data available")]
    EmptyPayload,
}

/// Fetches the chart payload once from `{api_base_url}/api/station-data`.
///
/// There is no retry, no timeout and no cancellation; the caller folds the
/// outcome into a [`crate::FetchState`] and the cycle ends there.
pub async fn fetch_station_data(api_base_url: &str) -> Result<StationDataPayload, FetchError> {
    let url = format!("{}/api/station-data", api_base_url.trim_end_matches('/'));
    debug!("GET request to: {}", url);

    let response = reqwest::get(&url).await?;
    let status = response.status();
    if !status.is_success() {
        error!("GET {} - HTTP error: {}", url, status);
        return Err(FetchError::Status(status));
    }

    let body = response.text().await?;
    if body.trim().is_empty() || body.trim() == "null" {
        error!("GET {} - empty body", url);
        return Err(FetchError::EmptyPayload);
    }

    let payload: StationDataPayload = serde_json::from_str(&body)?;
    info!("GET {} - Success", url);
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_reads_as_the_generic_no_data_message() {
        assert_eq!(FetchError::EmptyPayload.to_string(), "No data available");
    }
}
