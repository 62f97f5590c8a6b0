// order_service/src/web/routes.rs

use actix_web::{
  error::{JsonPayloadError, QueryPayloadError},
  web, HttpRequest, HttpResponse,
};

use crate::errors::AppError;
use crate::web::handlers::order_handlers;

// Liveness only; does not touch the store.
async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().content_type("text/plain; charset=utf-8").body("OK")
}

// Bodies are decoded regardless of Content-Type, and decode failures are
// reported through AppError so they share the JSON error shape.
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default()
    .content_type_required(false)
    .error_handler(|err: JsonPayloadError, _req: &HttpRequest| AppError::Validation(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
  web::QueryConfig::default()
    .error_handler(|err: QueryPayloadError, _req: &HttpRequest| AppError::Validation(err.to_string()).into())
}

// This function is called in `main.rs` (and by the integration tests) to configure the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(json_config())
    .app_data(query_config())
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope("/api/v1/orders")
        .service(
          web::resource("")
            .route(web::post().to(order_handlers::create_order_handler))
            .route(web::get().to(order_handlers::list_orders_handler)),
        )
        .service(
          web::resource("/{id}")
            .route(web::get().to(order_handlers::get_order_handler))
            .route(web::put().to(order_handlers::update_order_handler))
            .route(web::delete().to(order_handlers::delete_order_handler)),
        ),
    );
}
