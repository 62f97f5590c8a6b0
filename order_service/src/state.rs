// order_service/src/state.rs
use crate::services::OrderUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub order_service: Arc<dyn OrderUseCase>,
}

impl AppState {
  pub fn new(order_service: Arc<dyn OrderUseCase>) -> Self {
    Self { order_service }
  }
}
