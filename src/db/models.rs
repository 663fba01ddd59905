//! Entity records supplied by the data source.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::{CustomerId, ProductId, PurchaseId};

/// Customer record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
}

/// Product record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: i64,
    pub thumbnail: String,
}

/// Purchase record referencing a customer and a product by id.
///
/// Referential integrity to the product is not guaranteed by the data
/// source and is checked at query time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: PurchaseId,
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub date: NaiveDate,
}

/// Complete dataset snapshot as supplied by the data source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub purchases: Vec<Purchase>,
}

impl Dataset {
    /// Total number of records across all three collections.
    pub fn record_count(&self) -> usize {
        self.customers.len() + self.products.len() + self.purchases.len()
    }
}
