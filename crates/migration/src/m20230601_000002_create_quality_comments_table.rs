use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QualityComments::Table)
                    .col(
                        ColumnDef::new(QualityComments::ChipId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(QualityComments::Line).integer().not_null())
                    .col(
                        ColumnDef::new(QualityComments::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(ColumnDef::new(QualityComments::Status).string().not_null())
                    .col(ColumnDef::new(QualityComments::Author).string().not_null())
                    .col(ColumnDef::new(QualityComments::Text).text().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_quality_comments")
                            .col(QualityComments::ChipId)
                            .col(QualityComments::Line),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QualityComments::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
enum QualityComments {
    Table,
    ChipId,
    Line,
    CreatedAt,
    Status,
    Author,
    Text,
}
