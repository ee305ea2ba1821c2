use common::{AccuracyBucket, ForecastPoint, HourlyUsageSample, StationDataPayload, StationSample};

/// Maximum absolute deviation between a prediction and its observed value
/// still counted as accurate.
pub const ACCURACY_TOLERANCE: f64 = 2.0;

/// Classifies predictions against observed values into the two pie buckets.
///
/// Pairs are index-aligned. A prediction without an observed value at the
/// same index contributes to neither bucket; mismatched lengths are not an
/// error. The result order is fixed: Accurate first, Inaccurate second.
pub fn prediction_accuracy(predictions: &[f64], actual_values: &[f64]) -> [AccuracyBucket; 2] {
    let mut accurate = 0u64;
    let mut inaccurate = 0u64;

    for (i, prediction) in predictions.iter().enumerate() {
        match actual_values.get(i) {
            Some(actual) if (prediction - actual).abs() <= ACCURACY_TOLERANCE => accurate += 1,
            Some(_) => inaccurate += 1,
            None => {}
        }
    }

    [
        AccuracyBucket::accurate(accurate),
        AccuracyBucket::inaccurate(inaccurate),
    ]
}

/// Chart-ready series derived from one payload: the three passthrough
/// series plus the accuracy buckets, recomputed from scratch on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub availability: Vec<StationSample>,
    pub hourly_usage: Vec<HourlyUsageSample>,
    pub accuracy: [AccuracyBucket; 2],
    pub forecast: Vec<ForecastPoint>,
}

impl ChartData {
    pub fn from_payload(payload: &StationDataPayload) -> Self {
        Self {
            availability: payload.availability.clone(),
            hourly_usage: payload.hourly_usage.clone(),
            accuracy: prediction_accuracy(&payload.predictions, &payload.actual_values),
            forecast: payload.forecast.clone(),
        }
    }
}
