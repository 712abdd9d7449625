use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QualityRecords::Table)
                    .col(
                        ColumnDef::new(QualityRecords::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(QualityRecords::ChipId).big_integer())
                    .col(ColumnDef::new(QualityRecords::HdId).big_integer())
                    .col(ColumnDef::new(QualityRecords::Date).timestamp())
                    .col(ColumnDef::new(QualityRecords::Status).string())
                    .col(ColumnDef::new(QualityRecords::Color).string())
                    .col(ColumnDef::new(QualityRecords::Vehicle).string())
                    .col(ColumnDef::new(QualityRecords::OrderNumber).string())
                    .col(ColumnDef::new(QualityRecords::Plates).string())
                    .col(ColumnDef::new(QualityRecords::TechnicianId).big_integer())
                    .col(ColumnDef::new(QualityRecords::Technician).string())
                    .col(ColumnDef::new(QualityRecords::AdvisorId).big_integer())
                    .col(ColumnDef::new(QualityRecords::Advisor).string())
                    .col(ColumnDef::new(QualityRecords::StartTime).timestamp())
                    .col(ColumnDef::new(QualityRecords::EndTime).timestamp())
                    .col(ColumnDef::new(QualityRecords::OrderStatus).string())
                    .col(ColumnDef::new(QualityRecords::Mileage).big_integer())
                    .col(ColumnDef::new(QualityRecords::ContactName).string())
                    .col(ColumnDef::new(QualityRecords::ContactPhone).string())
                    .col(ColumnDef::new(QualityRecords::RealTime).integer())
                    .col(ColumnDef::new(QualityRecords::OriginalTime).integer())
                    .col(ColumnDef::new(QualityRecords::Service).string())
                    .col(ColumnDef::new(QualityRecords::CapturedService).string())
                    .col(ColumnDef::new(QualityRecords::PhaseId).integer())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_quality_records_phase_hd")
                    .table(QualityRecords::Table)
                    .col(QualityRecords::PhaseId)
                    .col(QualityRecords::HdId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QualityRecords::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
enum QualityRecords {
    Table,
    Id,
    ChipId,
    HdId,
    Date,
    Status,
    Color,
    Vehicle,
    OrderNumber,
    Plates,
    TechnicianId,
    Technician,
    AdvisorId,
    Advisor,
    StartTime,
    EndTime,
    OrderStatus,
    Mileage,
    ContactName,
    ContactPhone,
    RealTime,
    OriginalTime,
    Service,
    CapturedService,
    PhaseId,
}
