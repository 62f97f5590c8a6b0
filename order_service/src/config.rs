// order_service/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Text,
  Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub mongodb_uri: String,
  pub mongodb_database: String,
  pub mongodb_collection: String,
  pub connect_timeout: Duration,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from an arbitrary variable source. Unset and empty
  /// variables both fall back to their defaults.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_or = |name: &str, default: &str| {
      lookup(name)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
    };

    let server_host = get_or("SERVER_HOST", "0.0.0.0");
    let server_port = get_or("PORT", "8083")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid PORT: {}", e)))?;
    let mongodb_uri = get_or("MONGODB_URI", "mongodb://localhost:27017");
    let mongodb_database = get_or("MONGODB_DATABASE", "ecommerce");
    let mongodb_collection = get_or("MONGODB_COLLECTION", "orders");
    let connect_timeout = get_or("MONGODB_CONNECT_TIMEOUT_SECS", "10")
      .parse::<u64>()
      .map(Duration::from_secs)
      .map_err(|e| AppError::Config(format!("Invalid MONGODB_CONNECT_TIMEOUT_SECS: {}", e)))?;
    let log_format = match get_or("LOG_FORMAT", "text").to_ascii_lowercase().as_str() {
      "text" => LogFormat::Text,
      "json" => LogFormat::Json,
      other => {
        return Err(AppError::Config(format!(
          "Invalid LOG_FORMAT '{}': expected 'text' or 'json'",
          other
        )))
      }
    };

    Ok(Self {
      server_host,
      server_port,
      mongodb_uri,
      mongodb_database,
      mongodb_collection,
      connect_timeout,
      log_format,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
