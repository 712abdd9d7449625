mod error;
mod handlers;
mod schema;
mod validation;
mod workflow;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use aide::{axum::ApiRouter, openapi::OpenApi};
use axum::{Extension, Router, Server};
use common::{config::Config, logging};
use db::{Database, DatabaseConnection};
use tracing::info;
use workflow::QualityWorkflow;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::new(None)?;

    logging::init(&config);

    let Some(server_config) = config.server.as_ref() else {
        return Err(anyhow::Error::msg("unable to load server config"));
    };

    info!("connecting to database");
    let database = Arc::new(Database::connect(&config.database.url).await?);

    info!(address = %server_config.address, "starting server");
    let server = Server::bind(&server_config.address);
    let config = Arc::new(config);

    server
        .serve(app_router(database, config).into_make_service())
        .await?;

    Ok(())
}

fn app_router(database: Arc<DatabaseConnection>, config: Arc<Config>) -> Router {
    let workflow = Arc::new(QualityWorkflow::new(database, config.phases));

    let mut api = OpenApi::default();

    let router = ApiRouter::new()
        .merge(handlers::health::routes())
        .merge(handlers::auth::routes())
        .merge(handlers::quality::routes())
        .merge(handlers::docs::routes())
        .finish_api_with(&mut api, |api| {
            api.title("Quality inspection API")
                .description("Vehicle quality inspection workflow and comment history.")
        });

    router
        .layer(Extension(Arc::new(api)))
        .layer(Extension(config))
        .with_state(workflow)
}
