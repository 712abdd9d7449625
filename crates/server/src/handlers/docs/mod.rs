use std::sync::Arc;

use aide::{
    axum::{routing::get, ApiRouter},
    openapi::OpenApi,
    redoc::Redoc,
};
use axum::{Extension, Json};

use crate::workflow::QualityWorkflow;

/// Create an [`ApiRouter`] that provides an API server with documentation routes.
pub(crate) fn routes() -> ApiRouter<Arc<QualityWorkflow>> {
    ApiRouter::new()
        .route("/docs", Redoc::new("/docs/api.json").axum_route())
        .route(
            "/docs/api.json",
            get(|Extension(oapi): Extension<Arc<OpenApi>>| async move { Json(oapi) }),
        )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::testing::{create_database, ResponseBodyExt};

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use common::config::Config;
    use tower::ServiceExt;

    #[tokio::test]
    async fn api_document() {
        let db = create_database().await;

        let response = crate::app_router(Arc::new(db), Arc::new(Config::for_tests()))
            .oneshot(
                Request::builder()
                    .uri("/docs/api.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let value = response.json().await;
        let paths = value["paths"].as_object().unwrap();

        for path in [
            "/",
            "/api/calidad/",
            "/api/calidad/auth/me/",
            "/api/calidad/comentarios/",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }

    #[tokio::test]
    async fn redoc_page() {
        let db = create_database().await;

        let response = crate::app_router(Arc::new(db), Arc::new(Config::for_tests()))
            .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
