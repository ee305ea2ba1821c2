use anyhow::Result;
use tracing::{debug, trace};

use dashboard::{fetch_station_data, render, FetchState};

/// Fetches the chart payload once and prints the rendered dashboard. The
/// fetch outcome drives the presentation state; there is no retry.
pub async fn run_dashboard(api_base_url: &str) -> Result<()> {
    trace!("Entering run_dashboard function");
    debug!("API base URL: {}", api_base_url);

    println!("{}", render::render(&FetchState::Loading));

    let outcome = fetch_station_data(api_base_url).await;
    let state = FetchState::resolve(outcome);

    println!("{}", render::render(&state));
    Ok(())
}
