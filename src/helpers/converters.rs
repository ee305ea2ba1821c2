use common::{ForecastPoint, HourlyUsageSample};
use polars::prelude::*;

/// Helper function to convert the hourly usage DataFrame into transport samples
pub fn usage_frame_to_samples(df: DataFrame) -> Result<Vec<HourlyUsageSample>, String> {
    let hour_col = df
        .column("hour")
        .map_err(|e| format!("Missing hour column: {}", e))?;
    let mean_col = df
        .column("num_bikes_available")
        .map_err(|e| format!("Missing num_bikes_available column: {}", e))?;

    let mut samples = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let hour = hour_col
            .get(i)
            .map_err(|e| format!("Error getting hour at row {}: {}", i, e))?
            .try_extract::<u32>()
            .map_err(|e| format!("Error extracting hour as u32 at row {}: {}", i, e))?;

        let num_bikes_available = mean_col
            .get(i)
            .map_err(|e| format!("Error getting num_bikes_available at row {}: {}", i, e))?
            .try_extract::<f64>()
            .map_err(|e| format!("Error extracting num_bikes_available as f64 at row {}: {}", i, e))?;

        samples.push(HourlyUsageSample {
            hour,
            num_bikes_available,
        });
    }

    Ok(samples)
}

/// Helper function to convert the forecast DataFrame into transport points
pub fn forecast_frame_to_points(df: DataFrame) -> Result<Vec<ForecastPoint>, String> {
    let timestamp_col = df
        .column("timestamp")
        .map_err(|e| format!("Missing timestamp column: {}", e))?;
    let predicted_col = df
        .column("predicted")
        .map_err(|e| format!("Missing predicted column: {}", e))?;
    let actual_col = df
        .column("actual")
        .map_err(|e| format!("Missing actual column: {}", e))?;

    let mut points = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let seconds = timestamp_col
            .get(i)
            .map_err(|e| format!("Error getting timestamp at row {}: {}", i, e))?
            .try_extract::<i64>()
            .map_err(|e| format!("Error extracting timestamp as i64 at row {}: {}", i, e))?;
        let timestamp = chrono::DateTime::from_timestamp(seconds, 0)
            .ok_or_else(|| format!("Invalid timestamp value at row {}: {}", i, seconds))?
            .naive_utc();

        let predicted = predicted_col
            .get(i)
            .map_err(|e| format!("Error getting predicted at row {}: {}", i, e))?
            .try_extract::<f64>()
            .map_err(|e| format!("Error extracting predicted as f64 at row {}: {}", i, e))?;

        let actual = actual_col
            .get(i)
            .map_err(|e| format!("Error getting actual at row {}: {}", i, e))?
            .try_extract::<f64>()
            .map_err(|e| format!("Error extracting actual as f64 at row {}: {}", i, e))?;

        points.push(ForecastPoint {
            timestamp,
            predicted,
            actual,
        });
    }

    Ok(points)
}
