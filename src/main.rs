mod api;
mod app;
mod config;
mod container;
mod domain;
mod infrastructure;
mod opentelemetry;
mod services;

use config::AppConfig;
use container::Container;
use infrastructure::databases::surrealdb;

use actix_web::HttpServer;
use std::sync::Arc;
use thiserror::Error;

#[cfg(test)]
mod tests;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Database(#[from] ::surrealdb::Error),
    #[error(transparent)]
    Configuration(#[from] figment::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Migration(String),
    #[error(transparent)]
    OTel(#[from] opentelemetry::OTelError),
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;

    let provider = opentelemetry::configure(&config.service, &config.logging, &config.telemetry)?;

    let conn = surrealdb::connect(&config.surrealdb).await?;

    if config.surrealdb.migration {
        surrealdb::migrate(&conn)
            .await
            .map_err(StartupError::Migration)?;
    }

    let container = Arc::new(Container::new(conn));

    tracing::info!(host = %config.server.host, port = config.server.port, "starting server");

    HttpServer::new(move || app::create(Arc::clone(&container)))
        .bind((config.server.host.as_str(), config.server.port))?
        .run()
        .await?;

    opentelemetry::shutdown(provider)?;

    Ok(())
}

#[actix_web::main]
async fn main() {
    if let Err(err) = run().await {
        panic!("{err}");
    }
}
