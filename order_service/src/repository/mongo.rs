// order_service/src/repository/mongo.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::{self, doc, oid::ObjectId, Document};
use mongodb::Collection;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::{OrderRepository, StoreError};
use crate::models::{Order, OrderId};

/// Shape of an order as stored in the `orders` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDocument {
  #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
  pub id: Option<ObjectId>,
  pub user_id: String,
  pub product_id: String,
  pub quantity: i64,
  pub total_price: f64,
  pub status: String,
  pub created_at: bson::DateTime,
  pub updated_at: bson::DateTime,
}

impl OrderDocument {
  /// Builds the document to insert. The id is left for the store to assign.
  fn for_insert(order: &Order) -> Self {
    Self {
      id: None,
      user_id: order.user_id.clone(),
      product_id: order.product_id.clone(),
      quantity: order.quantity,
      total_price: order.total_price,
      status: order.status.clone(),
      created_at: to_bson_datetime(order.created_at),
      updated_at: to_bson_datetime(order.updated_at),
    }
  }

  fn into_order(self) -> Result<Order, StoreError> {
    Ok(Order {
      id: self.id.map(OrderId::from),
      user_id: self.user_id,
      product_id: self.product_id,
      quantity: self.quantity,
      total_price: self.total_price,
      status: self.status,
      created_at: from_bson_datetime(self.created_at)?,
      updated_at: from_bson_datetime(self.updated_at)?,
    })
  }
}

fn to_bson_datetime(ts: DateTime<Utc>) -> bson::DateTime {
  bson::DateTime::from_millis(ts.timestamp_millis())
}

fn from_bson_datetime(ts: bson::DateTime) -> Result<DateTime<Utc>, StoreError> {
  let millis = ts.timestamp_millis();
  DateTime::from_timestamp_millis(millis).ok_or(StoreError::InvalidTimestamp(millis))
}

fn id_filter(id: OrderId) -> Document {
  doc! { "_id": id.as_object_id() }
}

fn owner_filter(user_id: &str) -> Document {
  if user_id.is_empty() {
    doc! {}
  } else {
    doc! { "user_id": user_id }
  }
}

// user_id and created_at are deliberately absent: they are fixed at creation.
fn update_document(order: &Order) -> Document {
  doc! {
    "$set": {
      "product_id": order.product_id.as_str(),
      "quantity": order.quantity,
      "total_price": order.total_price,
      "status": order.status.as_str(),
      "updated_at": to_bson_datetime(order.updated_at),
    }
  }
}

/// [`OrderRepository`] backed by a MongoDB collection.
#[derive(Clone)]
pub struct MongoOrderRepository {
  collection: Collection<OrderDocument>,
}

impl MongoOrderRepository {
  pub fn new(collection: Collection<OrderDocument>) -> Self {
    Self { collection }
  }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
  #[instrument(name = "order_repository::create", skip(self, order), fields(user_id = %order.user_id), err(Display))]
  async fn create(&self, mut order: Order) -> Result<Order, StoreError> {
    let document = OrderDocument::for_insert(&order);
    let result = self.collection.insert_one(&document).await?;
    let oid = result.inserted_id.as_object_id().ok_or(StoreError::MissingInsertedId)?;
    order.id = Some(OrderId::from(oid));
    debug!(order_id = %oid, "Inserted order document.");
    Ok(order)
  }

  #[instrument(name = "order_repository::get_by_id", skip(self), fields(order_id = %id), err(Display))]
  async fn get_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
    match self.collection.find_one(id_filter(id)).await? {
      Some(document) => document.into_order().map(Some),
      None => {
        debug!("No order document found.");
        Ok(None)
      }
    }
  }

  #[instrument(name = "order_repository::get_all", skip(self), err(Display))]
  async fn get_all(&self, user_id: &str) -> Result<Vec<Order>, StoreError> {
    let cursor = self.collection.find(owner_filter(user_id)).await?;
    let documents: Vec<OrderDocument> = cursor.try_collect().await?;
    debug!(count = documents.len(), "Fetched order documents.");
    documents.into_iter().map(OrderDocument::into_order).collect()
  }

  #[instrument(name = "order_repository::update", skip(self, order), fields(order_id), err(Display))]
  async fn update(&self, order: &Order) -> Result<(), StoreError> {
    let id = order.id.ok_or(StoreError::MissingId)?;
    tracing::Span::current().record("order_id", tracing::field::display(id));

    let result = self.collection.update_one(id_filter(id), update_document(order)).await?;
    if result.matched_count == 0 {
      warn!("Update matched no order document.");
      return Err(StoreError::NotFound(id));
    }
    Ok(())
  }

  #[instrument(name = "order_repository::delete", skip(self), fields(order_id = %id), err(Display))]
  async fn delete(&self, id: OrderId) -> Result<(), StoreError> {
    let result = self.collection.delete_one(id_filter(id)).await?;
    if result.deleted_count == 0 {
      warn!("Delete matched no order document.");
      return Err(StoreError::NotFound(id));
    }
    Ok(())
  }
}
