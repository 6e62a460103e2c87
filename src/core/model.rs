//! Record types served by the mock API

use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// A record that can live in a [`Collection`](crate::core::Collection)
///
/// Every collection in this store is keyed by a numeric id.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The record's id (0 when the record has none)
    fn id(&self) -> i64;
}

/// A customer of the demo shop
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub order_total: f64,
}

/// One line of an [`Order`]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderItem {
    pub id: i64,
    pub product_name: String,
    pub item_cost: f64,
}

/// An order placed by a customer
///
/// `customer_id` refers to [`Customer::id`] but is never checked.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub order_items: Vec<OrderItem>,
}

impl Record for Customer {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for Order {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Customer {
    pub fn new(id: i64, name: &str, city: &str, order_total: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            city: city.to_string(),
            order_total,
        }
    }
}

impl OrderItem {
    pub fn new(id: i64, product_name: &str, item_cost: f64) -> Self {
        Self {
            id,
            product_name: product_name.to_string(),
            item_cost,
        }
    }
}

impl Order {
    pub fn new(id: i64, customer_id: i64, order_items: Vec<OrderItem>) -> Self {
        Self {
            id,
            customer_id,
            order_items,
        }
    }
}
