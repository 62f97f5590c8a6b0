// order_service/src/repository/mod.rs

//! Persistence contract for orders and its MongoDB implementation.

pub mod mongo;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Order, OrderId};

pub use mongo::MongoOrderRepository;

#[derive(Debug, Error)]
pub enum StoreError {
  /// An update or delete matched no document.
  #[error("no order document matched id {0}")]
  NotFound(OrderId),

  #[error("order has no id; only stored orders can be updated")]
  MissingId,

  #[error("store did not return an ObjectId for the inserted order")]
  MissingInsertedId,

  #[error("stored timestamp {0}ms is out of range")]
  InvalidTimestamp(i64),

  #[error(transparent)]
  Mongo(#[from] mongodb::error::Error),
}

/// Data access for orders.
///
/// Reads distinguish "absent" (`Ok(None)`) from failure (`Err`). Writes that
/// target a missing document fail with [`StoreError::NotFound`].
#[async_trait]
pub trait OrderRepository: Send + Sync {
  /// Inserts `order` and returns it with the store-assigned id filled in.
  /// Any id already present on `order` is discarded.
  async fn create(&self, order: Order) -> Result<Order, StoreError>;

  async fn get_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError>;

  /// All orders owned by `user_id`, or every order when `user_id` is empty.
  async fn get_all(&self, user_id: &str) -> Result<Vec<Order>, StoreError>;

  /// Overwrites `product_id`, `quantity`, `total_price`, `status` and `updated_at`.
  async fn update(&self, order: &Order) -> Result<(), StoreError>;

  async fn delete(&self, id: OrderId) -> Result<(), StoreError>;
}
