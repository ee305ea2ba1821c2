//! This file serves as the root for all SeaORM entity modules.
//! The data models cover the two stored collections of the monitoring
//! system: the station catalog and the rolling status history.

pub mod station_info;
pub mod station_status;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::station_info::Entity as StationInfo;
    pub use super::station_status::Entity as StationStatus;
}
