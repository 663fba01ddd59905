use serde::{Deserialize, Serialize};

use crate::api::CustomerId;

// =========================================================
// Customer summary types
// =========================================================

/// Per-customer aggregate of purchase count and total spend.
///
/// `total_purchases` counts purchase records; `total_amount` is the sum of
/// the joined product price per record. Both default to zero for customers
/// without purchases.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub id: CustomerId,
    pub name: String,
    pub total_purchases: u64,
    pub total_amount: i64,
}

/// Sort mode for the customer summary listing.
///
/// `Id` sorts by customer id ascending; `Asc`/`Desc` sort by total amount
/// with ties broken by id ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Id,
    Asc,
    Desc,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(format!("Unknown sort order: {}", s)),
        }
    }
}

/// Route function name constant for the customer listing
pub const LIST_CUSTOMERS: &str = "list_customers";
