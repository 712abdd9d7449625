use std::sync::Arc;

use aide::transform::TransformOperation;
use axum::{extract::State, Extension, Json};
use common::config::Config;
use serde_json::Value;

use super::response::QualityRecordResponse;
use crate::{
    error::AppError, schema::example_error, validation::ValidatedPath, workflow::QualityWorkflow,
};

/// Generate OAPI documentation for the [`vehicle`] handler.
pub(super) fn docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get quality phase records of a vehicle.")
        .description("Vehicles are looked up by their external HD identifier.")
        .response::<200, Json<Vec<QualityRecordResponse>>>()
        .response_with::<404, Json<Value>, _>(|op| {
            op.description("The vehicle is not in the quality phase.")
                .example(example_error(AppError::not_found(
                    "id_hd=1500 is not in the quality phase",
                )))
        })
}

/// Vehicle lookup request handler.
pub(super) async fn vehicle(
    ValidatedPath(hd_id): ValidatedPath<i64>,
    State(workflow): State<Arc<QualityWorkflow>>,
    Extension(config): Extension<Arc<Config>>,
) -> Result<Json<Vec<QualityRecordResponse>>, AppError> {
    let records = workflow
        .get_by_external_id(hd_id)
        .await?
        .into_iter()
        .map(|model| QualityRecordResponse::new(model, config.tracker.as_ref()))
        .collect();

    Ok(Json(records))
}
