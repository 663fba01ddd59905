//! Purchase frequency query: quantity-weighted counts per price band.

use std::collections::HashMap;

use crate::api::{ProductId, PurchaseFrequencyBucket};
use crate::db::models::{Product, Purchase};
use crate::services::error::{QueryError, QueryResult};
use crate::services::price_bands::{self, PRICE_BANDS};
use crate::services::validation::DateRange;

/// Count purchases per price band, weighted by purchase quantity.
///
/// When `range` is supplied, only purchases dated inside the inclusive
/// interval contribute. Every purchase must resolve to a product; a dangling
/// `product_id` aborts the whole query with an integrity error rather than
/// skewing the totals. The result always has one bucket per band, in band
/// order, including zero-count bands.
pub fn purchase_frequency(
    purchases: &[Purchase],
    products: &[Product],
    range: Option<DateRange>,
) -> QueryResult<Vec<PurchaseFrequencyBucket>> {
    let price_by_product: HashMap<&ProductId, i64> =
        products.iter().map(|p| (&p.id, p.price)).collect();

    let mut counts = [0u64; PRICE_BANDS.len()];

    for purchase in purchases {
        if let Some(range) = range {
            if !range.contains(purchase.date) {
                continue;
            }
        }

        let price = *price_by_product.get(&purchase.product_id).ok_or_else(|| {
            QueryError::integrity(format!(
                "Product with ID {} not found",
                purchase.product_id
            ))
        })?;

        let band = price_bands::classify(price).ok_or_else(|| {
            QueryError::integrity(format!(
                "Product with ID {} has price {} outside every price band",
                purchase.product_id, price
            ))
        })?;

        counts[band] += u64::from(purchase.quantity);
    }

    Ok(PRICE_BANDS
        .iter()
        .zip(counts)
        .map(|(band, count)| PurchaseFrequencyBucket {
            range: band.label.to_string(),
            count,
        })
        .collect())
}
