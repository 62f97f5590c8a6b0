// order_service/src/services/order_service.rs

//! Order lifecycle rules layered over an [`OrderRepository`].

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::errors::Result as AppResult;
use crate::models::{Order, OrderId, PENDING_STATUS};
use crate::repository::OrderRepository;

/// Current time at millisecond precision, the resolution timestamps are stored with.
fn now() -> DateTime<Utc> {
  Utc::now().trunc_subsecs(3)
}

/// Use-case operations the HTTP layer depends on.
#[async_trait]
pub trait OrderUseCase: Send + Sync {
  async fn create_order(&self, order: Order) -> AppResult<Order>;

  /// `Ok(None)` when no order has this id.
  async fn get_order(&self, id: OrderId) -> AppResult<Option<Order>>;

  /// An empty `user_id` lists every order.
  async fn get_orders(&self, user_id: &str) -> AppResult<Vec<Order>>;

  async fn update_order(&self, id: OrderId, order: Order) -> AppResult<()>;

  async fn delete_order(&self, id: OrderId) -> AppResult<()>;
}

/// Stateless; one instance is shared by every request.
#[derive(Clone)]
pub struct OrderService {
  repository: Arc<dyn OrderRepository>,
}

impl OrderService {
  pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
    Self { repository }
  }
}

#[async_trait]
impl OrderUseCase for OrderService {
  /// Stamps both timestamps with the same instant and forces the status to
  /// `pending`, whatever the caller sent.
  #[instrument(name = "order_service::create_order", skip(self, order), fields(user_id = %order.user_id, product_id = %order.product_id), err(Display))]
  async fn create_order(&self, mut order: Order) -> AppResult<Order> {
    let stamped = now();
    order.created_at = stamped;
    order.updated_at = stamped;
    order.status = PENDING_STATUS.to_string();

    let created = self.repository.create(order).await?;
    debug!(order_id = ?created.id, "Order created.");
    Ok(created)
  }

  #[instrument(name = "order_service::get_order", skip(self), fields(order_id = %id), err(Display))]
  async fn get_order(&self, id: OrderId) -> AppResult<Option<Order>> {
    Ok(self.repository.get_by_id(id).await?)
  }

  #[instrument(name = "order_service::get_orders", skip(self), err(Display))]
  async fn get_orders(&self, user_id: &str) -> AppResult<Vec<Order>> {
    Ok(self.repository.get_all(user_id).await?)
  }

  /// Overwrites the stored order wholesale with `order`. The prior record is
  /// not read, so zeroed fields in the input are written as zero.
  #[instrument(name = "order_service::update_order", skip(self, order), fields(order_id = %id), err(Display))]
  async fn update_order(&self, id: OrderId, mut order: Order) -> AppResult<()> {
    order.id = Some(id);
    order.updated_at = now();
    Ok(self.repository.update(&order).await?)
  }

  #[instrument(name = "order_service::delete_order", skip(self), fields(order_id = %id), err(Display))]
  async fn delete_order(&self, id: OrderId) -> AppResult<()> {
    Ok(self.repository.delete(id).await?)
  }
}
