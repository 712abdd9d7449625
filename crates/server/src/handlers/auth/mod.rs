/// Session check route.
mod me;

use std::sync::Arc;

use aide::axum::{routing::get_with, ApiRouter};

use crate::{handlers::quality::quality_path, workflow::QualityWorkflow};

/// Create an [`ApiRouter`] that provides an API server with authentication routes.
pub(crate) fn routes() -> ApiRouter<Arc<QualityWorkflow>> {
    ApiRouter::new()
        .api_route(quality_path!("/auth/me/"), get_with(me::me, me::docs))
        .with_path_items(|op| op.tag("Authentication"))
}
