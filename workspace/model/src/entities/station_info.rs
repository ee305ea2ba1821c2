use sea_orm::entity::prelude::*;

/// Static catalog entry for a bike-share station: location and nominal
/// capacity. Refreshed from the upstream information feed; the station id
/// comes from the feed, not from the database.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "station_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub station_id: i32,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub altitude: Option<f64>,
    /// Nominal dock count as published by the operator.
    pub capacity: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A station accumulates many status readings over time.
    #[sea_orm(has_many = "super::station_status::Entity")]
    StationStatus,
}

impl Related<super::station_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StationStatus.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
