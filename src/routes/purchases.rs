use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::{CustomerId, ProductId, PurchaseId};

// =========================================================
// Customer purchase detail types
// =========================================================

/// One purchase of a customer, enriched with the joined product's
/// name, price, and thumbnail for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseDetail {
    pub id: PurchaseId,
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub product_name: String,
    pub price: i64,
    pub purchase_date: NaiveDate,
    pub thumbnail: String,
}

/// Route function name constant for a customer's purchase history
pub const GET_CUSTOMER_PURCHASES: &str = "get_customer_purchases";

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_detail() -> PurchaseDetail {
        PurchaseDetail {
            id: PurchaseId::new("o-1"),
            customer_id: CustomerId::new("c-1"),
            product_id: ProductId::new("p-1"),
            product_name: "텀블러".to_string(),
            price: 25_000,
            purchase_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            thumbnail: "https://img.example.com/p-1.jpg".to_string(),
        }
    }

    #[test]
    fn test_purchase_detail_clone() {
        let detail = sample_detail();
        let cloned = detail.clone();
        assert_eq!(cloned.product_name, "텀블러");
        assert_eq!(cloned.price, 25_000);
    }

    #[test]
    fn test_purchase_detail_debug() {
        let debug_str = format!("{:?}", sample_detail());
        assert!(debug_str.contains("PurchaseDetail"));
    }

    #[test]
    fn test_purchase_detail_json_field_names() {
        let json = serde_json::to_value(sample_detail()).unwrap();
        assert_eq!(json["customerId"], "c-1");
        assert_eq!(json["productId"], "p-1");
        assert_eq!(json["productName"], "텀블러");
        assert_eq!(json["purchaseDate"], "2024-07-01");
        assert_eq!(json["thumbnail"], "https://img.example.com/p-1.jpg");
    }

    #[test]
    fn test_const_value() {
        assert_eq!(GET_CUSTOMER_PURCHASES, "get_customer_purchases");
    }
}
