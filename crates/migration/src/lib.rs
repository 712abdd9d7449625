pub use sea_orm_migration::prelude::*;

mod m20230601_000001_create_quality_records_table;
mod m20230601_000002_create_quality_comments_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230601_000001_create_quality_records_table::Migration),
            Box::new(m20230601_000002_create_quality_comments_table::Migration),
        ]
    }
}
