// order_service/src/db.rs

//! Store bootstrap: one long-lived MongoDB client per process.

use anyhow::{anyhow, Context};
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use tracing::{info, instrument};

use crate::config::AppConfig;
use crate::repository::mongo::OrderDocument;

/// Connects and pings the deployment, failing if either step exceeds the
/// configured connect timeout.
#[instrument(name = "db::connect", skip(config), fields(database = %config.mongodb_database))]
pub async fn connect(config: &AppConfig) -> anyhow::Result<Client> {
  let attempt = async {
    let client = Client::with_uri_str(&config.mongodb_uri)
      .await
      .context("invalid MongoDB connection string")?;
    client
      .database(&config.mongodb_database)
      .run_command(doc! { "ping": 1 })
      .await
      .context("MongoDB did not answer ping")?;
    Ok::<_, anyhow::Error>(client)
  };

  let client = tokio::time::timeout(config.connect_timeout, attempt)
    .await
    .map_err(|_| anyhow!("timed out connecting to MongoDB after {:?}", config.connect_timeout))??;

  info!("Connected to MongoDB.");
  Ok(client)
}

pub fn order_collection(client: &Client, config: &AppConfig) -> Collection<OrderDocument> {
  client
    .database(&config.mongodb_database)
    .collection::<OrderDocument>(&config.mongodb_collection)
}
