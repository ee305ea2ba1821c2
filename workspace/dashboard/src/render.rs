use crate::charts::ChartData;
use crate::state::FetchState;

/// Renders one fetch cycle as a terminal summary. Mirrors the three
/// presentation branches: a spinner line, the verbatim error, or the four
/// chart sections.
pub fn render(state: &FetchState) -> String {
    match state {
        FetchState::Loading => "Loading...".to_string(),
        FetchState::Error(message) => format!("Error: {}", message),
        FetchState::Ready(payload) => render_charts(&ChartData::from_payload(payload)),
    }
}

fn render_charts(charts: &ChartData) -> String {
    let mut out = String::new();

    out.push_str("Bike Sharing Dashboard\n");
    out.push_str("======================\n\n");

    out.push_str("Station Availability Over Time\n");
    if charts.availability.is_empty() {
        out.push_str("  (no samples)\n");
    } else {
        let first = &charts.availability[0];
        let last = &charts.availability[charts.availability.len() - 1];
        out.push_str(&format!(
            "  {} samples from {} to {}\n",
            charts.availability.len(),
            first.last_reported.format("%Y-%m-%d %H:%M"),
            last.last_reported.format("%Y-%m-%d %H:%M"),
        ));
        out.push_str(&format!(
            "  latest: {} bikes, {} docks\n",
            last.num_bikes_available, last.num_docks_available
        ));
    }

    out.push_str("\nAverage Hourly Usage\n");
    for sample in &charts.hourly_usage {
        out.push_str(&format!(
            "  {:02}:00  {:5.1} bikes\n",
            sample.hour, sample.num_bikes_available
        ));
    }

    out.push_str("\nPrediction Accuracy\n");
    let total: u64 = charts.accuracy.iter().map(|bucket| bucket.value).sum();
    for bucket in &charts.accuracy {
        if total > 0 {
            let percent = bucket.value as f64 / total as f64 * 100.0;
            out.push_str(&format!("  {} ({:.0}%)\n", bucket.name, percent));
        } else {
            out.push_str(&format!("  {} (0)\n", bucket.name));
        }
    }

    out.push_str("\nTime Series Forecast\n");
    for point in &charts.forecast {
        out.push_str(&format!(
            "  {}  predicted {:5.1}  actual {:5.1}\n",
            point.timestamp.format("%Y-%m-%d %H:%M"),
            point.predicted,
            point.actual
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::StationDataPayload;

    #[test]
    fn renders_the_three_presentation_branches() {
        assert_eq!(render(&FetchState::Loading), "Loading...");
        assert_eq!(
            render(&FetchState::Error("No data available".to_string())),
            "Error: No data available"
        );

        let ready = FetchState::Ready(StationDataPayload::default());
        let output = render(&ready);
        assert!(output.contains("Bike Sharing Dashboard"));
        assert!(output.contains("Prediction Accuracy"));
    }

    #[test]
    fn accuracy_section_shows_percentages() {
        let payload = StationDataPayload {
            predictions: vec![10.0, 20.0, 30.0, 40.0],
            actual_values: vec![10.0, 21.0, 35.0, 50.0],
            ..Default::default()
        };

        let output = render(&FetchState::Ready(payload));
        assert!(output.contains("Accurate (50%)"));
        assert!(output.contains("Inaccurate (50%)"));
    }
}
