use std::sync::Arc;

use aide::transform::TransformOperation;
use axum::{extract::State, Json};
use serde_json::Value;

use super::response::CommentResponse;
use crate::{
    error::AppError,
    schema::example_database_error,
    validation::ValidatedPath,
    workflow::QualityWorkflow,
};

/// Generate OAPI documentation for the [`comments`] handler.
pub(super) fn docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get comment history of a vehicle chip.")
        .description("Comments are ordered by their creation time and line number.")
        .response::<200, Json<Vec<CommentResponse>>>()
        .response_with::<500, Json<Value>, _>(|op| {
            op.description("Database error.")
                .example(example_database_error())
        })
}

/// Comment history request handler.
pub(super) async fn comments(
    ValidatedPath(chip_id): ValidatedPath<i64>,
    State(workflow): State<Arc<QualityWorkflow>>,
) -> Result<Json<Vec<CommentResponse>>, AppError> {
    let comments = workflow
        .list_comments(chip_id)
        .await?
        .into_iter()
        .map(CommentResponse::from)
        .collect();

    Ok(Json(comments))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        testing::{create_database, ResponseBodyExt},
        workflow::{NewComment, QualityWorkflow},
    };

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use common::config::Config;
    use tower::ServiceExt;

    #[tokio::test]
    async fn successful() {
        let db = Arc::new(create_database().await);
        let config = Config::for_tests();
        let workflow = QualityWorkflow::new(db.clone(), config.phases);

        for (chip_id, text) in [(42, "checked brakes"), (43, "washed"), (42, "checked tires")] {
            workflow
                .add_comment(NewComment {
                    chip_id,
                    status: String::from("OPEN"),
                    author: String::from("jdoe"),
                    text: String::from(text),
                })
                .await
                .expect("unable to add comment");
        }

        let response = crate::app_router(db, Arc::new(config))
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/calidad/comentarios/42/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let value = response.json().await;
        let comments = value.as_array().unwrap();

        assert_eq!(comments.len(), 2);

        assert_eq!(comments[0]["id_chip"], 42);
        assert_eq!(comments[0]["id_linea"], 1);
        assert_eq!(comments[0]["comentario"], "checked brakes");
        assert_eq!(comments[0]["cve_usuario"], "jdoe");
        assert_eq!(comments[0]["status"], "OPEN");
        assert!(comments[0]["fecha"].is_string());

        assert_eq!(comments[1]["id_linea"], 2);
        assert_eq!(comments[1]["comentario"], "checked tires");
    }

    #[tokio::test]
    async fn empty() {
        let db = create_database().await;

        let response = crate::app_router(Arc::new(db), Arc::new(Config::for_tests()))
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/calidad/comentarios/42/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.json().await, serde_json::json!([]));
    }
}
