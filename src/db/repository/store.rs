//! Core repository traits for dataset access.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::CustomerId;
use crate::db::models::{Customer, Dataset, Product, Purchase};

/// Repository trait for read access to the three entity collections.
///
/// Queries treat the returned collections as an immutable snapshot; all
/// filtering, joining, and aggregation happens in the service layer.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Check if the data source connection is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if the connection is healthy
    /// - `Ok(false)` if unhealthy but no error occurred
    /// - `Err(RepositoryError)` if the check itself failed
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Fetch all customer records.
    async fn fetch_customers(&self) -> RepositoryResult<Vec<Customer>>;

    /// Fetch one customer by id.
    ///
    /// # Returns
    /// * `Ok(Some(Customer))` if the customer exists
    /// * `Ok(None)` if no customer has this id
    /// * `Err(RepositoryError)` if the operation fails
    async fn fetch_customer(&self, customer_id: &CustomerId)
        -> RepositoryResult<Option<Customer>>;

    /// Fetch all product records.
    async fn fetch_products(&self) -> RepositoryResult<Vec<Product>>;

    /// Fetch all purchase records.
    async fn fetch_purchases(&self) -> RepositoryResult<Vec<Purchase>>;
}

/// Repository trait for replacing the stored dataset.
///
/// Loading is the only write operation; queries never mutate data.
#[async_trait]
pub trait DatasetLoader: Send + Sync {
    /// Replace the stored collections with `dataset`.
    ///
    /// # Returns
    /// * `Ok(usize)` - Total number of records loaded
    /// * `Err(RepositoryError)` - If the operation fails
    async fn load_dataset(&self, dataset: Dataset) -> RepositoryResult<usize>;
}
