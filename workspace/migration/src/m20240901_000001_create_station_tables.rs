use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create station catalog table
        manager
            .create_table(
                Table::create()
                    .table(StationInfo::Table)
                    .if_not_exists()
                    .col(integer(StationInfo::StationId).primary_key())
                    .col(string(StationInfo::Name))
                    .col(double(StationInfo::Lat))
                    .col(double(StationInfo::Lon))
                    .col(double_null(StationInfo::Altitude))
                    .col(integer_null(StationInfo::Capacity))
                    .to_owned(),
            )
            .await?;

        // Create status history table
        manager
            .create_table(
                Table::create()
                    .table(StationStatus::Table)
                    .if_not_exists()
                    .col(pk_auto(StationStatus::Id))
                    .col(integer(StationStatus::StationId))
                    .col(date_time(StationStatus::LastReported))
                    .col(integer(StationStatus::NumBikesAvailable))
                    .col(integer(StationStatus::NumDocksAvailable))
                    .col(integer(StationStatus::Mechanical))
                    .col(integer(StationStatus::Ebike))
                    .col(integer(StationStatus::Capacity))
                    .to_owned(),
            )
            .await?;

        // One reading per station per reporting time; feed re-fetches must
        // not duplicate rows.
        manager
            .create_index(
                Index::create()
                    .name("idx_station_status_station_reported")
                    .table(StationStatus::Table)
                    .col(StationStatus::StationId)
                    .col(StationStatus::LastReported)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StationStatus::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StationInfo::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum StationInfo {
    Table,
    StationId,
    Name,
    Lat,
    Lon,
    Altitude,
    Capacity,
}

#[derive(DeriveIden)]
enum StationStatus {
    Table,
    Id,
    StationId,
    LastReported,
    NumBikesAvailable,
    NumDocksAvailable,
    Mechanical,
    Ebike,
    Capacity,
}
