// order_service/src/lib.rs

//! Order management service: HTTP delivery over an order use-case layer over
//! a MongoDB-backed repository.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod repository;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod web;
