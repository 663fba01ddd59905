//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::customers::CustomerSummary;
pub use crate::routes::customers::SortOrder;
pub use crate::routes::frequency::PurchaseFrequencyBucket;
pub use crate::routes::purchases::PurchaseDetail;

use serde::{Deserialize, Serialize};

/// Customer identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub String);

/// Product identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

/// Purchase identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PurchaseId(pub String);

impl CustomerId {
    pub fn new(value: impl Into<String>) -> Self {
        CustomerId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        ProductId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PurchaseId {
    pub fn new(value: impl Into<String>) -> Self {
        PurchaseId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for PurchaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_id_roundtrip() {
        let id = CustomerId::new("c-1");
        assert_eq!(id.as_str(), "c-1");
        assert_eq!(id.to_string(), "c-1");
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = ProductId::new("p-42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"p-42\"");

        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_ordering_is_lexicographic() {
        let a = CustomerId::new("a");
        let b = CustomerId::new("b");
        assert!(a < b);
    }
}
