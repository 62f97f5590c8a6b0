// order_service/src/telemetry.rs

use crate::config::LogFormat;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init(format: LogFormat) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  match format {
    LogFormat::Text => builder.init(),
    LogFormat::Json => builder.json().init(),
  }
}
