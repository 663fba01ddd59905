//! In-memory local repository implementation.
//!
//! This module provides a local implementation of the repository traits
//! suitable for unit testing and local development. All data is stored in
//! memory, providing fast, deterministic, and isolated execution.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::CustomerId;
use crate::db::models::{Customer, Dataset, Product, Purchase};
use crate::db::repository::{
    DatasetLoader, DatasetRepository, ErrorContext, RepositoryError, RepositoryResult,
};

/// In-memory local repository.
///
/// Stores the three entity collections behind a read-write lock. Cloning is
/// cheap and shares the underlying data.
///
/// # Example
/// ```
/// use cpa_rust::db::repositories::LocalRepository;
/// use cpa_rust::db::models::Dataset;
///
/// let repo = LocalRepository::from_dataset(Dataset::default());
/// assert_eq!(repo.purchase_count(), 0);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
struct LocalData {
    customers: Vec<Customer>,
    products: Vec<Product>,
    purchases: Vec<Purchase>,

    // Connection health, toggleable for failure-path tests
    is_healthy: bool,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                is_healthy: true,
                ..Default::default()
            })),
        }
    }

    /// Create a repository pre-populated with `dataset`.
    pub fn from_dataset(dataset: Dataset) -> Self {
        let repo = Self::new();
        repo.replace_dataset(dataset);
        repo
    }

    /// Create a repository from a JSON document with `customers`,
    /// `products`, and `purchases` arrays.
    pub fn from_json_str(json: &str) -> RepositoryResult<Self> {
        let dataset: Dataset = serde_json::from_str(json).map_err(|e| {
            RepositoryError::query_with_context(
                format!("Failed to parse dataset JSON: {}", e),
                ErrorContext::new("from_json_str").with_entity("dataset"),
            )
        })?;
        Ok(Self::from_dataset(dataset))
    }

    /// Create a repository from a JSON dataset file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::ConfigurationError {
                message: format!("Failed to read dataset file: {}", e),
                context: ErrorContext::new("from_json_file")
                    .with_details(path.as_ref().display().to_string()),
            }
        })?;
        Self::from_json_str(&content)
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        let is_healthy = data.is_healthy;
        *data = LocalData {
            is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of customers stored.
    pub fn customer_count(&self) -> usize {
        self.data.read().customers.len()
    }

    /// Get the number of products stored.
    pub fn product_count(&self) -> usize {
        self.data.read().products.len()
    }

    /// Get the number of purchases stored.
    pub fn purchase_count(&self) -> usize {
        self.data.read().purchases.len()
    }

    fn replace_dataset(&self, dataset: Dataset) -> usize {
        let count = dataset.record_count();
        let mut data = self.data.write();
        data.customers = dataset.customers;
        data.products = dataset.products;
        data.purchases = dataset.purchases;
        count
    }

    /// Helper to check health and return an error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection("Data source is not healthy"));
        }
        Ok(())
    }
}

#[async_trait]
impl DatasetRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn fetch_customers(&self) -> RepositoryResult<Vec<Customer>> {
        self.check_health()?;
        Ok(self.data.read().customers.clone())
    }

    async fn fetch_customer(
        &self,
        customer_id: &CustomerId,
    ) -> RepositoryResult<Option<Customer>> {
        self.check_health()?;
        Ok(self
            .data
            .read()
            .customers
            .iter()
            .find(|c| &c.id == customer_id)
            .cloned())
    }

    async fn fetch_products(&self) -> RepositoryResult<Vec<Product>> {
        self.check_health()?;
        Ok(self.data.read().products.clone())
    }

    async fn fetch_purchases(&self) -> RepositoryResult<Vec<Purchase>> {
        self.check_health()?;
        Ok(self.data.read().purchases.clone())
    }
}

#[async_trait]
impl DatasetLoader for LocalRepository {
    async fn load_dataset(&self, dataset: Dataset) -> RepositoryResult<usize> {
        self.check_health()?;
        Ok(self.replace_dataset(dataset))
    }
}
