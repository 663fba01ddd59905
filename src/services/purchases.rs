//! Customer purchase detail query.

use std::collections::HashMap;

use crate::api::{CustomerId, ProductId, PurchaseDetail};
use crate::db::models::{Customer, Product, Purchase};
use crate::services::error::{QueryError, QueryResult};

/// Itemized purchase history for one customer, enriched with product data.
///
/// Fails with a not-found error when `customer_id` matches no customer,
/// which keeps "unknown customer" distinguishable from "customer with no
/// purchases" (an empty list). A purchase whose product cannot be resolved
/// aborts the query with an integrity error, the same policy as the
/// frequency query. Results are ordered by purchase date ascending, ties
/// broken by purchase id ascending.
pub fn customer_purchase_details(
    customer_id: &CustomerId,
    customers: &[Customer],
    purchases: &[Purchase],
    products: &[Product],
) -> QueryResult<Vec<PurchaseDetail>> {
    if !customers.iter().any(|c| &c.id == customer_id) {
        return Err(QueryError::not_found(format!(
            "Customer with ID {} not found",
            customer_id
        )));
    }

    let product_by_id: HashMap<&ProductId, &Product> =
        products.iter().map(|p| (&p.id, p)).collect();

    let mut details = Vec::new();
    for purchase in purchases.iter().filter(|p| &p.customer_id == customer_id) {
        let product = product_by_id
            .get(&purchase.product_id)
            .copied()
            .ok_or_else(|| {
                QueryError::integrity(format!(
                    "Product with ID {} not found",
                    purchase.product_id
                ))
            })?;

        details.push(PurchaseDetail {
            id: purchase.id.clone(),
            customer_id: purchase.customer_id.clone(),
            product_id: purchase.product_id.clone(),
            product_name: product.name.clone(),
            price: product.price,
            purchase_date: purchase.date,
            thumbnail: product.thumbnail.clone(),
        });
    }

    details.sort_by(|a, b| {
        a.purchase_date
            .cmp(&b.purchase_date)
            .then_with(|| a.id.cmp(&b.id))
    });

    Ok(details)
}
