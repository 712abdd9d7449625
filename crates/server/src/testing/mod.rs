use std::error::Error;

use axum::async_trait;
use db::{quality_record, ActiveValue, Database, DatabaseConnection, EntityTrait};
use hyper::body::{self, Bytes, HttpBody};
use migration::MigratorTrait;
use serde::Serialize;

pub(crate) async fn create_database() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("unable to create test database");

    migration::Migrator::up(&db, None)
        .await
        .expect("unable to run migrations");

    db
}

/// Insert an upstream quality record.
pub(crate) async fn insert_record(
    db: &DatabaseConnection,
    hd_id: i64,
    chip_id: i64,
    phase_id: i32,
) -> quality_record::Model {
    quality_record::Entity::insert(quality_record::ActiveModel {
        chip_id: ActiveValue::Set(Some(chip_id)),
        hd_id: ActiveValue::Set(Some(hd_id)),
        vehicle: ActiveValue::Set(Some(String::from("Corolla 2021"))),
        order_number: ActiveValue::Set(Some(format!("OS-{hd_id}"))),
        plates: ActiveValue::Set(Some(String::from("ABC-123"))),
        status: ActiveValue::Set(Some(String::from("PENDING"))),
        order_status: ActiveValue::Set(Some(String::from("OPEN"))),
        phase_id: ActiveValue::Set(Some(phase_id)),
        ..Default::default()
    })
    .exec_with_returning(db)
    .await
    .expect("unable to insert quality record")
}

pub(crate) trait RequestBodyExt: Sized {
    fn from_json<B: Serialize>(val: B) -> Self;
}

impl<T> RequestBodyExt for T
where
    T: HttpBody + From<Vec<u8>>,
{
    fn from_json<B: Serialize>(val: B) -> Self {
        T::from(serde_json::to_vec(&val).expect("unable to serialize"))
    }
}

#[async_trait(?Send)]
pub(crate) trait ResponseBodyExt {
    async fn bytes(self) -> Bytes;

    async fn json(self) -> serde_json::Value;
}

#[async_trait(?Send)]
impl<T> ResponseBodyExt for T
where
    T: HttpBody,
    T::Error: Error,
{
    async fn bytes(self) -> Bytes {
        body::to_bytes(self)
            .await
            .expect("unable to convert to bytes")
    }

    async fn json(self) -> serde_json::Value {
        serde_json::from_slice(&self.bytes().await).expect("unable to convert to json")
    }
}
