use sea_orm::entity::prelude::*;

/// One availability reading of a station. Readings are append-only and
/// unique per `(station_id, last_reported)`; re-fetching a feed must not
/// duplicate rows.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "station_status")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub station_id: i32,
    /// Reporting time of the sample.
    pub last_reported: DateTime,
    pub num_bikes_available: i32,
    pub num_docks_available: i32,
    /// Mechanical bikes among the available ones.
    pub mechanical: i32,
    /// E-bikes among the available ones.
    pub ebike: i32,
    /// Bikes plus docks at ingest time.
    pub capacity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::station_info::Entity",
        from = "Column::StationId",
        to = "super::station_info::Column::StationId"
    )]
    StationInfo,
}

impl Related<super::station_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StationInfo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
