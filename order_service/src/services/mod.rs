// order_service/src/services/mod.rs

pub mod order_service;

pub use order_service::{OrderService, OrderUseCase};
