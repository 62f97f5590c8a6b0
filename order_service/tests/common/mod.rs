// tests/common/mod.rs
#![allow(dead_code, unused_macros, unused_imports)] // Not every test binary uses every helper

use async_trait::async_trait;
use chrono::SubsecRound;
use order_service::errors::{AppError, Result as AppResult};
use order_service::models::{Order, OrderId, PENDING_STATUS};
use order_service::repository::{OrderRepository, StoreError};
use order_service::services::{OrderService, OrderUseCase};
use order_service::state::AppState;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

/// Builds the full actix app around `$state`, the same way `main.rs` does.
macro_rules! test_app {
  ($state:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($state))
        .configure(order_service::web::configure_app_routes),
    )
    .await
  };
}
pub(crate) use test_app;

pub fn setup_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init();
}

// --- In-memory repository ---

/// Keeps orders in a map and honours the same write rules as the Mongo adapter:
/// ids are assigned on insert, timestamps are kept to the millisecond, and
/// updates leave `user_id`/`created_at` alone.
#[derive(Default)]
pub struct InMemoryOrderRepository {
  orders: Mutex<HashMap<OrderId, Order>>,
}

impl InMemoryOrderRepository {
  pub fn len(&self) -> usize {
    self.orders.lock().len()
  }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
  async fn create(&self, mut order: Order) -> Result<Order, StoreError> {
    let id = OrderId::new();
    order.id = Some(id);
    order.created_at = order.created_at.trunc_subsecs(3);
    order.updated_at = order.updated_at.trunc_subsecs(3);
    self.orders.lock().insert(id, order.clone());
    Ok(order)
  }

  async fn get_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
    Ok(self.orders.lock().get(&id).cloned())
  }

  async fn get_all(&self, user_id: &str) -> Result<Vec<Order>, StoreError> {
    Ok(
      self
        .orders
        .lock()
        .values()
        .filter(|o| user_id.is_empty() || o.user_id == user_id)
        .cloned()
        .collect(),
    )
  }

  async fn update(&self, order: &Order) -> Result<(), StoreError> {
    let id = order.id.ok_or(StoreError::MissingId)?;
    let mut orders = self.orders.lock();
    let stored = orders.get_mut(&id).ok_or(StoreError::NotFound(id))?;
    stored.product_id = order.product_id.clone();
    stored.quantity = order.quantity;
    stored.total_price = order.total_price;
    stored.status = order.status.clone();
    stored.updated_at = order.updated_at.trunc_subsecs(3);
    Ok(())
  }

  async fn delete(&self, id: OrderId) -> Result<(), StoreError> {
    self.orders.lock().remove(&id).map(|_| ()).ok_or(StoreError::NotFound(id))
  }
}

/// The real service over an empty in-memory store.
pub fn in_memory_state() -> (AppState, Arc<InMemoryOrderRepository>) {
  let repo = Arc::new(InMemoryOrderRepository::default());
  let service = OrderService::new(repo.clone());
  (AppState::new(Arc::new(service)), repo)
}

// --- Stub use case ---

/// Counts calls and either answers with `found` or fails every operation.
#[derive(Default)]
pub struct StubOrderUseCase {
  pub calls: AtomicUsize,
  pub found: Option<Order>,
  pub fail: bool,
}

impl StubOrderUseCase {
  pub fn failing() -> Self {
    Self { fail: true, ..Default::default() }
  }

  pub fn returning(order: Order) -> Self {
    Self { found: Some(order), ..Default::default() }
  }

  pub fn call_count(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }

  fn record(&self) -> AppResult<()> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    if self.fail {
      return Err(AppError::Internal("store unavailable".to_string()));
    }
    Ok(())
  }
}

#[async_trait]
impl OrderUseCase for StubOrderUseCase {
  async fn create_order(&self, mut order: Order) -> AppResult<Order> {
    self.record()?;
    order.id = Some(OrderId::new());
    order.status = PENDING_STATUS.to_string();
    Ok(order)
  }

  async fn get_order(&self, _id: OrderId) -> AppResult<Option<Order>> {
    self.record()?;
    Ok(self.found.clone())
  }

  async fn get_orders(&self, _user_id: &str) -> AppResult<Vec<Order>> {
    self.record()?;
    Ok(self.found.clone().into_iter().collect())
  }

  async fn update_order(&self, _id: OrderId, _order: Order) -> AppResult<()> {
    self.record()
  }

  async fn delete_order(&self, _id: OrderId) -> AppResult<()> {
    self.record()
  }
}

pub fn stub_state(stub: Arc<StubOrderUseCase>) -> AppState {
  AppState::new(stub)
}
