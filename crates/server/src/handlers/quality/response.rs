//! JSON representations shared by the quality routes.
//!
//! Field names follow the board frontend wire format.

use common::config::Tracker;
use db::{comment, quality_record, OffsetDateTime, PrimitiveDateTime};
use schemars::JsonSchema;
use serde::Serialize;

fn utc(value: Option<PrimitiveDateTime>) -> Option<OffsetDateTime> {
    value.map(PrimitiveDateTime::assume_utc)
}

/// A single quality record.
#[derive(Serialize, JsonSchema)]
pub(crate) struct QualityRecordResponse {
    /// Record identifier.
    #[schemars(example = "crate::schema::example_database_identifier")]
    id: i64,

    /// Vehicle chip identifier.
    #[serde(rename = "id_chip")]
    #[schemars(example = "crate::schema::example_chip_id")]
    chip_id: Option<i64>,

    /// External HD identifier.
    #[serde(rename = "id_hd")]
    #[schemars(example = "crate::schema::example_hd_id")]
    hd_id: Option<i64>,

    /// Appointment date.
    #[serde(rename = "fecha", with = "time::serde::rfc3339::option")]
    #[schemars(with = "Option<String>", example = "crate::schema::example_timestamp")]
    date: Option<OffsetDateTime>,

    /// Quality status label.
    #[schemars(example = "crate::schema::example_status")]
    status: Option<String>,

    color: Option<String>,

    #[serde(rename = "vehiculo")]
    #[schemars(example = "crate::schema::example_vehicle")]
    vehicle: Option<String>,

    #[serde(rename = "no_orden")]
    #[schemars(example = "crate::schema::example_order_number")]
    order_number: Option<String>,

    #[serde(rename = "no_placas")]
    #[schemars(example = "crate::schema::example_plates")]
    plates: Option<String>,

    #[serde(rename = "id_tecnico")]
    technician_id: Option<i64>,

    #[serde(rename = "tecnico")]
    technician: Option<String>,

    #[serde(rename = "id_asesor")]
    advisor_id: Option<i64>,

    #[serde(rename = "asesor")]
    advisor: Option<String>,

    /// Quality inspection start time.
    #[serde(rename = "fecha_hora_ini_oper", with = "time::serde::rfc3339::option")]
    #[schemars(with = "Option<String>", example = "crate::schema::example_timestamp")]
    start_time: Option<OffsetDateTime>,

    /// Quality inspection finish time.
    #[serde(rename = "fecha_hora_fin_oper", with = "time::serde::rfc3339::option")]
    #[schemars(with = "Option<String>")]
    end_time: Option<OffsetDateTime>,

    /// Order status label.
    #[serde(rename = "status_os")]
    #[schemars(example = "crate::schema::example_order_status")]
    order_status: Option<String>,

    #[serde(rename = "kilometraje")]
    mileage: Option<i64>,

    #[serde(rename = "contacto_nombre")]
    contact_name: Option<String>,

    #[serde(rename = "contacto_telefono")]
    contact_phone: Option<String>,

    /// Actual service time, in minutes.
    #[serde(rename = "tmp_real")]
    real_time: Option<i32>,

    /// Estimated service time, in minutes.
    #[serde(rename = "tmp_original")]
    original_time: Option<i32>,

    #[serde(rename = "servicio")]
    service: Option<String>,

    #[serde(rename = "servicio_capturado")]
    captured_service: Option<String>,

    /// Workflow phase identifier.
    #[serde(rename = "id_fase")]
    #[schemars(example = "crate::schema::example_phase_id")]
    phase_id: Option<i32>,

    /// External order tracker link.
    #[schemars(example = "crate::schema::example_tracker_url")]
    tracker_url: Option<String>,
}

impl QualityRecordResponse {
    pub(crate) fn new(model: quality_record::Model, tracker: Option<&Tracker>) -> Self {
        let tracker_url = tracker
            .zip(model.order_number.as_deref())
            .filter(|(_, order_number)| !order_number.is_empty())
            .map(|(tracker, order_number)| tracker.url_for(order_number));

        Self {
            id: model.id,
            chip_id: model.chip_id,
            hd_id: model.hd_id,
            date: utc(model.date),
            status: model.status,
            color: model.color,
            vehicle: model.vehicle,
            order_number: model.order_number,
            plates: model.plates,
            technician_id: model.technician_id,
            technician: model.technician,
            advisor_id: model.advisor_id,
            advisor: model.advisor,
            start_time: utc(model.start_time),
            end_time: utc(model.end_time),
            order_status: model.order_status,
            mileage: model.mileage,
            contact_name: model.contact_name,
            contact_phone: model.contact_phone,
            real_time: model.real_time,
            original_time: model.original_time,
            service: model.service,
            captured_service: model.captured_service,
            phase_id: model.phase_id,
            tracker_url,
        }
    }
}

/// A single comment entry.
#[derive(Serialize, JsonSchema)]
pub(crate) struct CommentResponse {
    /// Vehicle chip identifier.
    #[serde(rename = "id_chip")]
    #[schemars(example = "crate::schema::example_chip_id")]
    chip_id: i64,

    /// Comment creation time.
    #[serde(rename = "fecha", with = "time::serde::rfc3339")]
    #[schemars(with = "String", example = "crate::schema::example_timestamp")]
    created_at: OffsetDateTime,

    /// Status label at the moment of writing.
    #[schemars(example = "crate::schema::example_status")]
    status: String,

    /// Author identifier.
    #[serde(rename = "cve_usuario")]
    #[schemars(example = "crate::schema::example_user")]
    author: String,

    /// Per-chip line number.
    #[serde(rename = "id_linea")]
    #[schemars(example = "crate::schema::example_line")]
    line: i32,

    /// Comment text.
    #[serde(rename = "comentario")]
    #[schemars(example = "crate::schema::example_comment")]
    text: String,
}

impl From<comment::Model> for CommentResponse {
    fn from(model: comment::Model) -> Self {
        Self {
            chip_id: model.chip_id,
            created_at: model.created_at.assume_utc(),
            status: model.status,
            author: model.author,
            line: model.line,
            text: model.text,
        }
    }
}
