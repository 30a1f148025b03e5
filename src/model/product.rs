//! The product entity and its payloads.
//!
//! [`Product`] implements [`ActorEntity`](actor_framework::ActorEntity) in
//! [`product_actor::entity`](crate::product_actor::entity); see there for how
//! creation, updates and stock actions are applied.
//!
//! A product carries two identifiers:
//! - [`RecordId`], the store key, numbered by the actor and used to address it;
//! - [`ProductId`], the external id minted by the node's
//!   [`IdGenerator`](crate::id_gen::IdGenerator) when the product is created.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe store key for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u32);

impl From<u32> for RecordId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generated product identifier. Opaque to everything but the generator.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: RecordId,
    pub product_id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_available: u32,
}

impl Product {
    pub fn new(id: RecordId, product_id: ProductId, upsert: ProductUpsert) -> Self {
        Self {
            id,
            product_id,
            name: upsert.name,
            description: upsert.description,
            price: upsert.price,
            stock_available: upsert.stock_available,
        }
    }

    /// Replaces every editable field. Both identifiers stay as they are.
    pub fn apply(&mut self, upsert: ProductUpsert) {
        self.name = upsert.name;
        self.description = upsert.description;
        self.price = upsert.price;
        self.stock_available = upsert.stock_available;
    }
}

/// Payload for both creating and fully replacing a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpsert {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub stock_available: u32,
}

impl ProductUpsert {
    pub fn new(name: impl Into<String>, price: f64, stock_available: u32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            stock_available,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Checks the fields a stored product must satisfy.
    ///
    /// Returns a message naming the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be blank".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("price must be a non-negative amount, got {}", self.price));
        }
        Ok(())
    }
}
