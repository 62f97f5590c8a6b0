// order_service/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use order_service::config::AppConfig;
use order_service::repository::MongoOrderRepository;
use order_service::services::OrderService;
use order_service::state::AppState;
use order_service::{db, telemetry, web};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  let app_config = AppConfig::from_env().context("failed to load configuration")?;
  telemetry::init(app_config.log_format);

  tracing::info!("Starting order service...");

  // The client is the only shared resource; it lives until the server stops.
  let client = db::connect(&app_config).await.map_err(|e| {
    tracing::error!(error = ?e, "Failed to connect to the database.");
    e
  })?;

  let repository = MongoOrderRepository::new(db::order_collection(&client, &app_config));
  let order_service = OrderService::new(Arc::new(repository));
  let app_state = AppState::new(Arc::new(order_service));

  let server_address = app_config.bind_address();
  tracing::info!("Order service is listening on {}", server_address);

  let served = HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("failed to bind {}", server_address))?
  .run()
  .await;

  tracing::info!("HTTP server stopped; closing MongoDB client.");
  client.shutdown().await;

  served.context("HTTP server terminated with an error")
}
