/// Comment append route.
mod add_comment;

/// Comment history route.
mod comments;

/// Quality inspection finish route.
mod finish;

/// Single record route.
mod item;

/// Quality phase record list route.
mod list;

/// Shared JSON representations.
mod response;

/// Quality inspection start route.
mod start;

/// Vehicle lookup route.
mod vehicle;

/// Previous phase vehicle lookup route.
mod vehicle_info;

use std::sync::Arc;

use aide::axum::{
    routing::{get_with, post_with},
    ApiRouter,
};
use schemars::JsonSchema;
use serde::Deserialize;
use validator::Validate;

use crate::workflow::QualityWorkflow;

/// Prefix all quality routes share.
macro_rules! quality_path {
    ($path:literal) => {
        concat!("/api/calidad", $path)
    };
}

pub(crate) use quality_path;

/// JSON request body of the lifecycle transition routes.
#[derive(Deserialize, Validate, JsonSchema)]
pub(super) struct UserRequest {
    /// Identifier of the user executing the transition.
    #[serde(rename = "usuario")]
    #[validate(length(min = 1))]
    #[schemars(example = "crate::schema::example_user")]
    user: String,
}

/// Create an [`ApiRouter`] that provides an API server with quality inspection routes.
pub(crate) fn routes() -> ApiRouter<Arc<QualityWorkflow>> {
    ApiRouter::new()
        .api_route(quality_path!("/"), get_with(list::list, list::docs))
        .api_route(
            quality_path!("/vehiculo/:id_hd/"),
            get_with(vehicle::vehicle, vehicle::docs),
        )
        .api_route(quality_path!("/item/:id/"), get_with(item::item, item::docs))
        .api_route(
            quality_path!("/vehiculo-info/:id_hd/"),
            get_with(vehicle_info::vehicle_info, vehicle_info::docs),
        )
        .api_route(
            quality_path!("/comentarios/"),
            post_with(add_comment::add_comment, add_comment::docs),
        )
        .api_route(
            quality_path!("/comentarios/:id_chip/"),
            get_with(comments::comments, comments::docs),
        )
        .api_route(
            quality_path!("/:id/iniciar/"),
            post_with(start::start, start::docs),
        )
        .api_route(
            quality_path!("/:id/finalizar/"),
            post_with(finish::finish, finish::docs),
        )
        .with_path_items(|op| op.tag("Quality inspection"))
}
