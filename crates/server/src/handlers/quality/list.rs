use std::sync::Arc;

use aide::transform::TransformOperation;
use axum::{extract::State, Extension, Json};
use common::config::Config;
use serde_json::Value;

use super::response::QualityRecordResponse;
use crate::{error::AppError, schema::example_database_error, workflow::QualityWorkflow};

/// Generate OAPI documentation for the [`list`] handler.
pub(super) fn docs(op: TransformOperation) -> TransformOperation {
    op.summary("List vehicles in the quality phase.")
        .response::<200, Json<Vec<QualityRecordResponse>>>()
        .response_with::<500, Json<Value>, _>(|op| {
            op.description("Database error.")
                .example(example_database_error())
        })
}

/// Quality phase record list request handler.
pub(super) async fn list(
    State(workflow): State<Arc<QualityWorkflow>>,
    Extension(config): Extension<Arc<Config>>,
) -> Result<Json<Vec<QualityRecordResponse>>, AppError> {
    let records = workflow
        .list_in_phase()
        .await?
        .into_iter()
        .map(|model| QualityRecordResponse::new(model, config.tracker.as_ref()))
        .collect();

    Ok(Json(records))
}
