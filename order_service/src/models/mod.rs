// order_service/src/models/mod.rs

//! Contains the data structures exchanged between the web, service and repository layers.

pub mod order;

pub use order::{Order, OrderId, PENDING_STATUS};
