use chrono::Timelike;
use model::entities::station_status;
use polars::prelude::*;
use std::collections::BTreeMap;

use crate::error::Result;

/// Computes the mean number of available bikes per hour of day.
///
/// Returns a frame with `hour` and `num_bikes_available` columns, ascending
/// hours. Hours with no samples are omitted rather than zero-filled.
pub fn hourly_usage_frame(rows: &[station_status::Model]) -> Result<DataFrame> {
    let mut buckets: BTreeMap<u32, (f64, u32)> = BTreeMap::new();

    for row in rows {
        let bucket = buckets.entry(row.last_reported.hour()).or_insert((0.0, 0));
        bucket.0 += row.num_bikes_available as f64;
        bucket.1 += 1;
    }

    let mut hours = Vec::with_capacity(buckets.len());
    let mut means = Vec::with_capacity(buckets.len());
    for (hour, (sum, count)) in buckets {
        hours.push(hour);
        means.push(sum / count as f64);
    }

    let df = DataFrame::new(vec![
        Series::new("hour".into(), hours).into(),
        Series::new("num_bikes_available".into(), means).into(),
    ])?;

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(day: u32, hour: u32, bikes: i32) -> station_status::Model {
        station_status::Model {
            id: 0,
            station_id: 1,
            last_reported: NaiveDate::from_ymd_opt(2024, 9, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            num_bikes_available: bikes,
            num_docks_available: 20 - bikes,
            mechanical: bikes,
            ebike: 0,
            capacity: 20,
        }
    }

    #[test]
    fn averages_samples_within_an_hour_bucket() {
        // Hour 8 observed on two days, hour 17 once.
        let rows = vec![row(1, 8, 4), row(2, 8, 8), row(1, 17, 10)];

        let df = hourly_usage_frame(&rows).unwrap();
        assert_eq!(df.height(), 2);

        let hour = df.column("hour").unwrap();
        let mean = df.column("num_bikes_available").unwrap();

        assert_eq!(hour.get(0).unwrap().try_extract::<u32>().unwrap(), 8);
        assert_eq!(mean.get(0).unwrap().try_extract::<f64>().unwrap(), 6.0);
        assert_eq!(hour.get(1).unwrap().try_extract::<u32>().unwrap(), 17);
        assert_eq!(mean.get(1).unwrap().try_extract::<f64>().unwrap(), 10.0);
    }

    #[test]
    fn empty_input_yields_empty_frame() {
        let df = hourly_usage_frame(&[]).unwrap();
        assert_eq!(df.height(), 0);
    }
}
