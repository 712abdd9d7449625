use std::sync::Arc;

use aide::{
    axum::{routing::get_with, ApiRouter},
    transform::TransformOperation,
};
use axum::{Extension, Json};
use common::config::Config;
use schemars::JsonSchema;
use serde::Serialize;

use crate::workflow::QualityWorkflow;

/// Root health check response.
#[derive(Serialize, JsonSchema)]
pub(crate) struct HealthResponse {
    status: &'static str,

    /// Configured project name, or the package name of the running server.
    project: String,

    /// Package version of the running server.
    version: &'static str,
}

fn docs(op: TransformOperation) -> TransformOperation {
    op.summary("Check if the server is running.")
        .response::<200, Json<HealthResponse>>()
}

async fn health(Extension(config): Extension<Arc<Config>>) -> Json<HealthResponse> {
    let project = config
        .project
        .as_ref()
        .map(|project| project.name.clone())
        .unwrap_or_else(|| String::from(env!("CARGO_PKG_NAME")));

    Json(HealthResponse {
        status: "ok",
        project,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Create an [`ApiRouter`] that provides an API server with the root health check route.
pub(crate) fn routes() -> ApiRouter<Arc<QualityWorkflow>> {
    ApiRouter::new()
        .api_route("/", get_with(health, docs))
        .with_path_items(|op| op.tag("Health"))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::testing::{create_database, ResponseBodyExt};

    use assert_json::assert_json;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use common::config::Config;
    use tower::ServiceExt;

    #[tokio::test]
    async fn running() {
        let db = create_database().await;

        let response = crate::app_router(Arc::new(db), Arc::new(Config::for_tests()))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        assert_json!(response.json().await, {
            "status": "ok",
            "project": "Quality board",
            "version": env!("CARGO_PKG_VERSION")
        });
    }

    #[tokio::test]
    async fn package_name_fallback() {
        let db = create_database().await;

        let config = Config {
            project: None,
            ..Config::for_tests()
        };

        let response = crate::app_router(Arc::new(db), Arc::new(config))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.json().await["project"], env!("CARGO_PKG_NAME"));
    }
}
