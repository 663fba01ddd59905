//! Customer summary query: per-customer purchase count and total spend.

use std::collections::{HashMap, HashSet};

use crate::api::{CustomerId, CustomerSummary, ProductId, SortOrder};
use crate::db::models::{Customer, Product, Purchase};
use crate::services::error::{QueryError, QueryResult};

/// Build the searchable, sortable per-customer summary list.
///
/// `total_purchases` counts purchase records (one per record, unlike the
/// quantity-weighted frequency query) and `total_amount` adds the joined
/// product price once per record. Customers without purchases are kept with
/// zero totals. A purchase referencing a customer or product missing from
/// the dataset aborts the query with an integrity error.
///
/// A non-empty `name_filter` keeps only customers whose name contains it as
/// a case-sensitive substring. Sorting is by id for [`SortOrder::Id`] and by
/// total amount for [`SortOrder::Asc`]/[`SortOrder::Desc`], ties broken by
/// id ascending.
pub fn customer_summaries(
    customers: &[Customer],
    purchases: &[Purchase],
    products: &[Product],
    name_filter: Option<&str>,
    sort: SortOrder,
) -> QueryResult<Vec<CustomerSummary>> {
    let price_by_product: HashMap<&ProductId, i64> =
        products.iter().map(|p| (&p.id, p.price)).collect();
    let known_customers: HashSet<&CustomerId> = customers.iter().map(|c| &c.id).collect();

    let mut totals: HashMap<&CustomerId, (u64, i64)> = HashMap::new();
    for purchase in purchases {
        if !known_customers.contains(&purchase.customer_id) {
            return Err(QueryError::integrity(format!(
                "Customer with ID {} not found",
                purchase.customer_id
            )));
        }

        let price = *price_by_product.get(&purchase.product_id).ok_or_else(|| {
            QueryError::integrity(format!(
                "Product with ID {} not found",
                purchase.product_id
            ))
        })?;

        let entry = totals.entry(&purchase.customer_id).or_default();
        entry.0 += 1;
        entry.1 += price;
    }

    let mut summaries: Vec<CustomerSummary> = customers
        .iter()
        .filter(|customer| match name_filter {
            Some(filter) if !filter.is_empty() => customer.name.contains(filter),
            _ => true,
        })
        .map(|customer| {
            let (total_purchases, total_amount) =
                totals.get(&customer.id).copied().unwrap_or((0, 0));
            CustomerSummary {
                id: customer.id.clone(),
                name: customer.name.clone(),
                total_purchases,
                total_amount,
            }
        })
        .collect();

    match sort {
        SortOrder::Id => summaries.sort_by(|a, b| a.id.cmp(&b.id)),
        SortOrder::Asc => summaries.sort_by(|a, b| {
            a.total_amount
                .cmp(&b.total_amount)
                .then_with(|| a.id.cmp(&b.id))
        }),
        SortOrder::Desc => summaries.sort_by(|a, b| {
            b.total_amount
                .cmp(&a.total_amount)
                .then_with(|| a.id.cmp(&b.id))
        }),
    }

    Ok(summaries)
}

#[cfg(test)]
#[path = "customers_tests.rs"]
mod customers_tests;
