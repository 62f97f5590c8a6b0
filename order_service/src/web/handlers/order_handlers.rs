// order_service/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::models::{Order, OrderId};
use crate::state::AppState;

/// Owner filter from the query string. Repeated keys resolve to the first
/// value; an absent key means every order.
fn user_id_filter(params: &[(String, String)]) -> &str {
  params
    .iter()
    .find(|(key, _)| key == "user_id")
    .map(|(_, value)| value.as_str())
    .unwrap_or("")
}

/// Parses a path segment into an [`OrderId`], rejecting it before any service call.
fn parse_order_id(raw: &str) -> Result<OrderId, AppError> {
  raw.parse().map_err(|e| {
    warn!(raw_id = %raw, error = %e, "Rejecting malformed order id.");
    AppError::Validation("Invalid order ID".to_string())
  })
}

#[instrument(name = "handler::create_order", skip(app_state, payload))]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<Order>,
) -> Result<HttpResponse, AppError> {
  let created = app_state.order_service.create_order(payload.into_inner()).await?;
  info!(order_id = ?created.id, "Order created.");
  Ok(HttpResponse::Created().json(created))
}

#[instrument(name = "handler::list_orders", skip(app_state, query), fields(user_id = %user_id_filter(&query)))]
pub async fn list_orders_handler(
  app_state: web::Data<AppState>,
  query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
  let orders = app_state.order_service.get_orders(user_id_filter(&query)).await?;
  info!("Listed {} orders.", orders.len());
  Ok(HttpResponse::Ok().json(orders))
}

#[instrument(name = "handler::get_order", skip(app_state, path), fields(order_id = %path.as_str()))]
pub async fn get_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let id = parse_order_id(&path)?;

  match app_state.order_service.get_order(id).await? {
    Some(order) => Ok(HttpResponse::Ok().json(order)),
    None => {
      warn!("Order {} not found.", id);
      Err(AppError::NotFound("Order not found".to_string()))
    }
  }
}

// The id in the path wins over any id in the body, and the body replaces
// every mutable field.
#[instrument(name = "handler::update_order", skip(app_state, path, payload), fields(order_id = %path.as_str()))]
pub async fn update_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<Order>,
) -> Result<HttpResponse, AppError> {
  let id = parse_order_id(&path)?;
  app_state.order_service.update_order(id, payload.into_inner()).await?;
  info!("Order {} updated.", id);
  Ok(HttpResponse::Ok().json(json!({ "message": "Order updated successfully" })))
}

#[instrument(name = "handler::delete_order", skip(app_state, path), fields(order_id = %path.as_str()))]
pub async fn delete_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let id = parse_order_id(&path)?;
  app_state.order_service.delete_order(id).await?;
  info!("Order {} deleted.", id);
  Ok(HttpResponse::Ok().json(json!({ "message": "Order deleted successfully" })))
}
