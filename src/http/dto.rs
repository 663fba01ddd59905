//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The response DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{CustomerSummary, PurchaseDetail, PurchaseFrequencyBucket, SortOrder};

/// Query parameters for the purchase frequency endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FrequencyQuery {
    /// Start of the date window (ISO 8601, inclusive)
    #[serde(default)]
    pub from: Option<String>,
    /// End of the date window (ISO 8601, inclusive)
    #[serde(default)]
    pub to: Option<String>,
}

/// Query parameters for the customer listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomersQuery {
    /// Sort mode: "id" (default), "asc", or "desc"
    #[serde(rename = "sortBy", default)]
    pub sort_by: SortOrder,
    /// Case-sensitive name substring filter
    #[serde(default)]
    pub name: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Data source connection status
    pub database: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customers_query_defaults() {
        let query: CustomersQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.sort_by, SortOrder::Id);
        assert!(query.name.is_none());
    }

    #[test]
    fn test_customers_query_parses_sort_by() {
        let query: CustomersQuery =
            serde_json::from_str(r#"{"sortBy": "desc", "name": "김"}"#).unwrap();
        assert_eq!(query.sort_by, SortOrder::Desc);
        assert_eq!(query.name.as_deref(), Some("김"));
    }

    #[test]
    fn test_frequency_query_defaults() {
        let query: FrequencyQuery = serde_json::from_str("{}").unwrap();
        assert!(query.from.is_none());
        assert!(query.to.is_none());
    }
}
