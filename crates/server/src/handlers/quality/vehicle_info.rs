use std::sync::Arc;

use aide::transform::TransformOperation;
use axum::{extract::State, Extension, Json};
use common::config::Config;
use serde_json::Value;

use super::response::QualityRecordResponse;
use crate::{
    error::AppError, schema::example_error, validation::ValidatedPath, workflow::QualityWorkflow,
};

/// Generate OAPI documentation for the [`vehicle_info`] handler.
pub(super) fn docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get vehicle information from the previous phase.")
        .description(
            r#"Returns the first record of the vehicle that is either in the phase
preceding the quality inspection or in the quality phase itself.
When both exist, no preference between them is guaranteed.
        "#,
        )
        .response::<200, Json<QualityRecordResponse>>()
        .response_with::<404, Json<Value>, _>(|op| {
            op.description("The vehicle is in neither of the phases.")
                .example(example_error(AppError::not_found(
                    "id_hd=1500 is not in the previous phase",
                )))
        })
}

/// Previous phase vehicle lookup request handler.
pub(super) async fn vehicle_info(
    ValidatedPath(hd_id): ValidatedPath<i64>,
    State(workflow): State<Arc<QualityWorkflow>>,
    Extension(config): Extension<Arc<Config>>,
) -> Result<Json<QualityRecordResponse>, AppError> {
    let model = workflow.get_prior_phase_info(hd_id).await?;

    Ok(Json(QualityRecordResponse::new(
        model,
        config.tracker.as_ref(),
    )))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::testing::{create_database, insert_record, ResponseBodyExt};

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use common::config::Config;
    use tower::ServiceExt;

    #[tokio::test]
    async fn previous_phase() {
        let db = create_database().await;

        insert_record(&db, 100, 42, 6).await;

        let response = crate::app_router(Arc::new(db), Arc::new(Config::for_tests()))
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/calidad/vehiculo-info/100/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let value = response.json().await;

        assert_eq!(value["id_hd"], 100);
        assert_eq!(value["id_fase"], 6);
    }

    #[tokio::test]
    async fn other_phase() {
        let db = create_database().await;

        insert_record(&db, 100, 42, 2).await;

        let response = crate::app_router(Arc::new(db), Arc::new(Config::for_tests()))
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/calidad/vehiculo-info/100/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.json().await["code"], "not_found");
    }
}
