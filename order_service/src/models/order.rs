// order_service/src/models/order.rs

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Status every order is given when it is created.
pub const PENDING_STATUS: &str = "pending";

/// Store-assigned order identifier. Rendered as a 24 character hex string on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderId(ObjectId);

impl OrderId {
  pub fn new() -> Self {
    Self(ObjectId::new())
  }

  pub fn as_object_id(&self) -> ObjectId {
    self.0
  }
}

impl Default for OrderId {
  fn default() -> Self {
    Self::new()
  }
}

impl From<ObjectId> for OrderId {
  fn from(oid: ObjectId) -> Self {
    Self(oid)
  }
}

impl fmt::Display for OrderId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0.to_hex())
  }
}

impl FromStr for OrderId {
  type Err = mongodb::bson::oid::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    ObjectId::parse_str(s).map(Self)
  }
}

impl Serialize for OrderId {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.0.to_hex())
  }
}

impl<'de> Deserialize<'de> for OrderId {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
  }
}

/// A purchase order.
///
/// Every field defaults when absent from a JSON body, so a request that only
/// carries `status` decodes into an order whose other fields are zeroed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
  pub id: Option<OrderId>,
  pub user_id: String,
  pub product_id: String,
  pub quantity: i64,
  pub total_price: f64,
  pub status: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}
