use aide::transform::TransformOperation;
use axum::Json;
use schemars::JsonSchema;
use serde::Serialize;

/// Session check response.
#[derive(Serialize, JsonSchema)]
pub(super) struct MeResponse {
    /// Session state, always `ok`.
    status: &'static str,

    /// Human-readable session description.
    message: &'static str,
}

/// Generate OAPI documentation for the [`me`] handler.
pub(super) fn docs(op: TransformOperation) -> TransformOperation {
    op.summary("Check the current session.")
        .description("Every caller is currently treated as authenticated.")
        .response::<200, Json<MeResponse>>()
}

/// Session check request handler.
pub(super) async fn me() -> Json<MeResponse> {
    Json(MeResponse {
        status: "ok",
        message: "Authenticated",
    })
}
