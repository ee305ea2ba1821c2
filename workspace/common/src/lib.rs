//! Common transport-layer types shared between the API server and the
//! dashboard client. These structs mirror the wire format of the
//! `/api/station-data` payload so both halves deserialize the same shapes
//! without duplicating them.

mod payload;
mod station;

pub use payload::{
    AccuracyBucket, ForecastPoint, HourlyUsageSample, StationDataPayload, StationSample,
};
pub use station::StationInfoDto;
