use chrono::{NaiveDateTime, Timelike};
use model::entities::station_status;
use polars::prelude::*;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::{FORECAST_HORIZON_HOURS, SMOOTHING_FACTOR};

/// Computes the predicted-vs-observed forecast series for the chart.
///
/// The status rows are resampled to hourly means, then run through a
/// one-step-ahead level forecast: the prediction for each slot is the
/// smoothed level of everything before it. The last
/// [`FORECAST_HORIZON_HOURS`] slots are emitted as a frame with
/// `timestamp` (epoch seconds), `predicted` and `actual` columns.
pub fn forecast_frame(rows: &[station_status::Model]) -> Result<DataFrame> {
    let series = hourly_series(rows);

    let mut smoothed = Vec::with_capacity(series.len());
    let mut level: Option<f64> = None;
    for (timestamp, actual) in series {
        let predicted = level.unwrap_or(actual);
        smoothed.push((timestamp, predicted, actual));
        level = Some(SMOOTHING_FACTOR * actual + (1.0 - SMOOTHING_FACTOR) * predicted);
    }

    let window_start = smoothed.len().saturating_sub(FORECAST_HORIZON_HOURS);
    let window = &smoothed[window_start..];

    let mut timestamps = Vec::with_capacity(window.len());
    let mut predicted = Vec::with_capacity(window.len());
    let mut actual = Vec::with_capacity(window.len());
    for (timestamp, p, a) in window {
        timestamps.push(timestamp.and_utc().timestamp());
        predicted.push(*p);
        actual.push(*a);
    }

    let df = DataFrame::new(vec![
        Series::new("timestamp".into(), timestamps).into(),
        Series::new("predicted".into(), predicted).into(),
        Series::new("actual".into(), actual).into(),
    ])?;

    Ok(df)
}

/// Mean bikes available per hour slot, chronological.
fn hourly_series(rows: &[station_status::Model]) -> Vec<(NaiveDateTime, f64)> {
    let mut buckets: BTreeMap<NaiveDateTime, (f64, u32)> = BTreeMap::new();

    for row in rows {
        // hour() is always a valid hour-of-day, the truncation cannot fail
        let slot = row
            .last_reported
            .date()
            .and_hms_opt(row.last_reported.hour(), 0, 0)
            .unwrap();
        let bucket = buckets.entry(slot).or_insert((0.0, 0));
        bucket.0 += row.num_bikes_available as f64;
        bucket.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(slot, (sum, count))| (slot, sum / count as f64))
        .collect()
}
