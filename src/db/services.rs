//! High-level service layer over the repository traits.
//!
//! This module provides repository-agnostic entry points that fetch the raw
//! collections from any repository implementation and hand them to the pure
//! query core in [`crate::services`]. These functions are what the HTTP
//! handlers (and tests) call.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, tests)                     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Query Orchestration       │
//! │  - Date range validation                                  │
//! │  - Snapshot retrieval                                     │
//! │  - Pure query core invocation                             │
//! └───────────────────┬─────────────────────────────────────┘
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!     ┌───────────────▼──────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```

use tracing::debug;

use super::models::Dataset;
use super::repository::{FullRepository, RepositoryResult};
use crate::api::{CustomerId, CustomerSummary, PurchaseDetail, PurchaseFrequencyBucket, SortOrder};
use crate::services::error::QueryResult;
use crate::services::{customers, frequency, purchases, validation};

// ==================== Health & Connection ====================

/// Check if the data source connection is healthy.
///
/// # Arguments
/// * `repo` - Repository implementation
///
/// # Returns
/// * `Ok(true)` if the connection is healthy
/// * `Err` if the check fails
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Dataset Loading ====================

/// Replace the stored dataset.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `dataset` - Collections to load
///
/// # Returns
/// * `Ok(usize)` - Total number of records loaded
pub async fn load_dataset<R: FullRepository + ?Sized>(
    repo: &R,
    dataset: Dataset,
) -> RepositoryResult<usize> {
    let loaded = repo.load_dataset(dataset).await?;
    debug!(records = loaded, "dataset loaded");
    Ok(loaded)
}

// ==================== Query Operations ====================

/// Quantity-weighted purchase counts per price band, optionally restricted
/// to an inclusive `from`/`to` date window.
///
/// Validates the raw query parameters, fetches a snapshot of purchases and
/// products, and runs [`frequency::purchase_frequency`].
pub async fn purchase_frequency<R: FullRepository + ?Sized>(
    repo: &R,
    from: Option<&str>,
    to: Option<&str>,
) -> QueryResult<Vec<PurchaseFrequencyBucket>> {
    let range = validation::parse_date_range(from, to)?;

    let purchases = repo.fetch_purchases().await?;
    let products = repo.fetch_products().await?;

    frequency::purchase_frequency(&purchases, &products, range)
}

/// Per-customer purchase count and total spend, searchable and sortable.
pub async fn customer_summaries<R: FullRepository + ?Sized>(
    repo: &R,
    sort: SortOrder,
    name_filter: Option<&str>,
) -> QueryResult<Vec<CustomerSummary>> {
    let customers = repo.fetch_customers().await?;
    let purchases = repo.fetch_purchases().await?;
    let products = repo.fetch_products().await?;

    customers::customer_summaries(&customers, &purchases, &products, name_filter, sort)
}

/// Itemized purchase history for one customer.
pub async fn customer_purchase_details<R: FullRepository + ?Sized>(
    repo: &R,
    customer_id: &CustomerId,
) -> QueryResult<Vec<PurchaseDetail>> {
    let customers = repo.fetch_customers().await?;
    let purchases = repo.fetch_purchases().await?;
    let products = repo.fetch_products().await?;

    purchases::customer_purchase_details(customer_id, &customers, &purchases, &products)
}
