use std::sync::Arc;

use aide::transform::TransformOperation;
use axum::{extract::State, Extension, Json};
use common::config::Config;
use serde_json::Value;

use super::{response::QualityRecordResponse, UserRequest};
use crate::{
    error::AppError,
    schema::example_error,
    validation::{ValidatedJson, ValidatedPath},
    workflow::QualityWorkflow,
};

/// Generate OAPI documentation for the [`start`] handler.
pub(super) fn docs(op: TransformOperation) -> TransformOperation {
    op.summary("Start a quality inspection.")
        .description(
            "Sets the start time of a record, marks it as started and \
             appends an automatic comment to the vehicle chip history.",
        )
        .response::<200, Json<QualityRecordResponse>>()
        .response_with::<404, Json<Value>, _>(|op| {
            op.description("No record with the provided identifier exists.")
                .example(example_error(AppError::not_found("id=1")))
        })
        .response_with::<422, Json<Value>, _>(|op| {
            op.description("Quality inspection was already started.")
                .example(example_error(AppError::validation(
                    "quality inspection already started",
                )))
        })
}

/// Quality inspection start request handler.
pub(super) async fn start(
    ValidatedPath(id): ValidatedPath<i64>,
    State(workflow): State<Arc<QualityWorkflow>>,
    Extension(config): Extension<Arc<Config>>,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> Result<Json<QualityRecordResponse>, AppError> {
    let model = workflow.start(id, &request.user).await?;

    Ok(Json(QualityRecordResponse::new(
        model,
        config.tracker.as_ref(),
    )))
}
