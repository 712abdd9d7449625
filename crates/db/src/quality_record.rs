//! Vehicle visit tracked through the quality inspection phase.
//!
//! Records are created upstream by earlier workflow phases. The quality
//! workflow only ever moves the lifecycle timestamps and the status label
//! of an existing record, see [`Model::start_time`] and [`Model::end_time`].

use sea_orm::entity::prelude::*;

/// Quality record model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "quality_records")]
pub struct Model {
    /// Unique record identifier.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Vehicle chip identifier, correlates a record with its comment history.
    pub chip_id: Option<i64>,

    /// External HD system identifier.
    pub hd_id: Option<i64>,

    /// Appointment date.
    pub date: Option<TimeDateTime>,

    /// Human readable status label.
    pub status: Option<String>,

    pub color: Option<String>,
    pub vehicle: Option<String>,
    pub order_number: Option<String>,
    pub plates: Option<String>,
    pub technician_id: Option<i64>,
    pub technician: Option<String>,
    pub advisor_id: Option<i64>,
    pub advisor: Option<String>,

    /// Moment the quality inspection was started.
    pub start_time: Option<TimeDateTime>,

    /// Moment the quality inspection was finished.
    ///
    /// Never set without [`Model::start_time`] being set as well.
    pub end_time: Option<TimeDateTime>,

    /// Order status label, independent of [`Model::status`].
    pub order_status: Option<String>,

    pub mileage: Option<i64>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,

    /// Actual service time, in minutes.
    pub real_time: Option<i32>,

    /// Estimated service time, in minutes.
    pub original_time: Option<i32>,

    pub service: Option<String>,
    pub captured_service: Option<String>,

    /// Workflow phase marker.
    pub phase_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
