use chrono::Timelike;
use model::entities::station_status;
use std::collections::BTreeMap;

use crate::EVALUATION_FRACTION;

/// Evaluates an hour-of-day baseline predictor over a chronological holdout.
///
/// The first part of the rows trains the predictor (mean bikes available per
/// hour of day); the trailing [`EVALUATION_FRACTION`] of rows is the holdout.
/// Returns index-aligned `(predictions, actual_values)` vectors of equal
/// length. Fewer than five rows cannot be split and yield empty vectors.
pub fn baseline_predictions(rows: &[station_status::Model]) -> (Vec<f64>, Vec<f64>) {
    if rows.len() < 5 {
        return (Vec::new(), Vec::new());
    }

    let holdout = ((rows.len() as f64) * EVALUATION_FRACTION).round().max(1.0) as usize;
    let (train, test) = rows.split_at(rows.len() - holdout);

    let mut buckets: BTreeMap<u32, (f64, u32)> = BTreeMap::new();
    let mut total = 0.0;
    for row in train {
        let bucket = buckets.entry(row.last_reported.hour()).or_insert((0.0, 0));
        bucket.0 += row.num_bikes_available as f64;
        bucket.1 += 1;
        total += row.num_bikes_available as f64;
    }
    let overall_mean = total / train.len() as f64;

    let hour_means: BTreeMap<u32, f64> = buckets
        .into_iter()
        .map(|(hour, (sum, count))| (hour, sum / count as f64))
        .collect();

    let mut predictions = Vec::with_capacity(test.len());
    let mut actual_values = Vec::with_capacity(test.len());
    for row in test {
        let predicted = hour_means
            .get(&row.last_reported.hour())
            .copied()
            .unwrap_or(overall_mean);
        predictions.push(predicted);
        actual_values.push(row.num_bikes_available as f64);
    }

    (predictions, actual_values)
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
    fn predicts_the_training_mean_for_the_holdout_hour() {
        // Ten rows: the last two form the holdout. Hour 8 averages 6.0
        // in training, hour 23 never occurs there.
        let rows = vec![
            row(1, 8, 4),
            row(1, 9, 5),
            row(1, 10, 5),
            row(1, 11, 5),
            row(2, 8, 8),
            row(2, 9, 5),
            row(2, 10, 5),
            row(2, 11, 5),
            row(3, 8, 7),
            row(3, 23, 9),
        ];

        let (predictions, actual_values) = baseline_predictions(&rows);
        assert_eq!(predictions.len(), 2);
        assert_eq!(actual_values, vec![7.0, 9.0]);
        // Known hour uses its bucket mean, unknown hour falls back to the
        // overall training mean.
        assert_eq!(predictions[0], 6.0);
        assert_eq!(predictions[1], 5.25);
    }

    #[test]
    fn prediction_and_actual_vectors_stay_aligned() {
        let rows: Vec<_> = (0..20).map(|i| row(1 + i / 24, i % 24, (i % 7) as i32)).collect();
        let (predictions, actual_values) = baseline_predictions(&rows);
        assert_eq!(predictions.len(), actual_values.len());
        assert_eq!(predictions.len(), 4);
    }

    #[test]
    fn too_few_rows_yield_empty_vectors() {
        let rows = vec![row(1, 8, 4), row(1, 9, 5)];
        let (predictions, actual_values) = baseline_predictions(&rows);
        assert!(predictions.is_empty());
        assert!(actual_values.is_empty());
    }
}
