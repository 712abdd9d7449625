use std::sync::Arc;

use aide::transform::TransformOperation;
use axum::{extract::State, Extension, Json};
use common::config::Config;
use serde_json::Value;

use super::response::QualityRecordResponse;
use crate::{
    error::AppError, schema::example_error, validation::ValidatedPath, workflow::QualityWorkflow,
};

/// Generate OAPI documentation for the [`item`] handler.
pub(super) fn docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get a quality record.")
        .response::<200, Json<QualityRecordResponse>>()
        .response_with::<404, Json<Value>, _>(|op| {
            op.description("No record with the provided identifier exists.")
                .example(example_error(AppError::not_found("id=1")))
        })
}

/// Single record request handler.
pub(super) async fn item(
    ValidatedPath(id): ValidatedPath<i64>,
    State(workflow): State<Arc<QualityWorkflow>>,
    Extension(config): Extension<Arc<Config>>,
) -> Result<Json<QualityRecordResponse>, AppError> {
    let model = workflow.get_by_id(id).await?;

    Ok(Json(QualityRecordResponse::new(
        model,
        config.tracker.as_ref(),
    )))
}
