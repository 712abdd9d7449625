use std::sync::Arc;

use aide::transform::TransformOperation;
use axum::{extract::State, Json};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use super::response::CommentResponse;
use crate::{
    error::AppError,
    schema::example_error,
    validation::ValidatedJson,
    workflow::{NewComment, QualityWorkflow},
};

/// JSON request body.
#[derive(Deserialize, Validate, JsonSchema)]
pub(super) struct AddCommentRequest {
    /// Vehicle chip identifier.
    #[serde(rename = "id_chip")]
    #[schemars(example = "crate::schema::example_chip_id")]
    chip_id: i64,

    /// Status label at the moment of writing.
    #[validate(length(min = 1))]
    #[schemars(example = "crate::schema::example_status")]
    status: String,

    /// Author identifier.
    #[serde(rename = "cve_usuario")]
    #[validate(length(min = 1))]
    #[schemars(example = "crate::schema::example_user")]
    author: String,

    /// Comment text, must contain at least one non-whitespace character.
    #[serde(rename = "comentario")]
    #[schemars(example = "crate::schema::example_comment")]
    text: String,
}

/// Generate OAPI documentation for the [`add_comment`] handler.
pub(super) fn docs(op: TransformOperation) -> TransformOperation {
    op.summary("Add a comment to a vehicle chip.")
        .description("The comment receives the next line number of the chip, starting from one.")
        .response::<200, Json<CommentResponse>>()
        .response_with::<422, Json<Value>, _>(|op| {
            op.description("Comment text is empty or the request body is invalid.")
                .example(example_error(AppError::validation(
                    "comment text must not be empty",
                )))
        })
}

/// Comment append request handler.
pub(super) async fn add_comment(
    State(workflow): State<Arc<QualityWorkflow>>,
    ValidatedJson(request): ValidatedJson<AddCommentRequest>,
) -> Result<Json<CommentResponse>, AppError> {
    let model = workflow
        .add_comment(NewComment {
            chip_id: request.chip_id,
            status: request.status,
            author: request.author,
            text: request.text,
        })
        .await?;

    Ok(Json(model.into()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::testing::{create_database, RequestBodyExt, ResponseBodyExt};

    use assert_json::assert_json;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use common::config::Config;
    use db::{comment, EntityTrait};
    use serde_json::json;
    use tower::Service;

    fn request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/calidad/comentarios/")
            .header("Content-Type", "application/json")
            .body(Body::from_json(body))
            .unwrap()
    }

    #[tokio::test]
    async fn incremental_lines() {
        let db = Arc::new(create_database().await);

        let mut service = crate::app_router(db.clone(), Arc::new(Config::for_tests()));

        let body = json!({
            "id_chip": 42,
            "status": "OPEN",
            "cve_usuario": "jdoe",
            "comentario": "checked brakes"
        });

        let response = service.call(request(body.clone())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let value = response.json().await;

        assert_eq!(value["id_chip"], 42);
        assert_eq!(value["id_linea"], 1);
        assert_eq!(value["status"], "OPEN");
        assert_eq!(value["cve_usuario"], "jdoe");
        assert_eq!(value["comentario"], "checked brakes");
        assert!(value["fecha"].is_string());

        let response = service.call(request(body)).await.unwrap();

        assert_eq!(response.json().await["id_linea"], 2);

        let stored = comment::Entity::find()
            .all(&*db)
            .await
            .expect("unable to list comments");

        assert_eq!(stored.len(), 2);
    }

    #[tokio::test]
    async fn blank_text() {
        let db = Arc::new(create_database().await);

        let mut service = crate::app_router(db.clone(), Arc::new(Config::for_tests()));

        let response = service
            .call(request(json!({
                "id_chip": 42,
                "status": "OPEN",
                "cve_usuario": "jdoe",
                "comentario": "   "
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        assert_json!(response.json().await, {
            "code": "validation_error",
            "message": "The provided data is not valid.",
            "detail": "comment text must not be empty"
        });

        let stored = comment::Entity::find()
            .all(&*db)
            .await
            .expect("unable to list comments");

        assert!(stored.is_empty());
    }

    #[tokio::test]
    async fn malformed_body() {
        let db = create_database().await;

        let response = crate::app_router(Arc::new(db), Arc::new(Config::for_tests()))
            .call(request(json!({
                "id_chip": "not a number",
                "status": "OPEN",
                "cve_usuario": "jdoe",
                "comentario": "checked brakes"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.json().await["code"], "validation_error");
    }

    #[tokio::test]
    async fn missing_author() {
        let db = create_database().await;

        let response = crate::app_router(Arc::new(db), Arc::new(Config::for_tests()))
            .call(request(json!({
                "id_chip": 42,
                "status": "OPEN",
                "cve_usuario": "",
                "comentario": "checked brakes"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.json().await["code"], "validation_error");
    }
}
