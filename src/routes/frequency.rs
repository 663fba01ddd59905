use serde::{Deserialize, Serialize};

// =========================================================
// Purchase frequency types
// =========================================================

/// One price band of the purchase frequency result.
///
/// `range` is the band's display label and `count` the accumulated,
/// quantity-weighted number of purchases in that band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseFrequencyBucket {
    pub range: String,
    pub count: u64,
}

/// Route function name constant for purchase frequency data
pub const GET_PURCHASE_FREQUENCY: &str = "get_purchase_frequency";
