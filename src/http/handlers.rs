//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the query logic.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{CustomersQuery, FrequencyQuery, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::{CustomerId, CustomerSummary, PurchaseDetail, PurchaseFrequencyBucket};
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the data
/// source is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Query Endpoints
// =============================================================================

/// GET /api/purchase-frequency
///
/// Get quantity-weighted purchase counts per price band, optionally
/// restricted to an inclusive `from`/`to` date window.
pub async fn purchase_frequency(
    State(state): State<AppState>,
    Query(query): Query<FrequencyQuery>,
) -> HandlerResult<Vec<PurchaseFrequencyBucket>> {
    let buckets = db_services::purchase_frequency(
        state.repository.as_ref(),
        query.from.as_deref(),
        query.to.as_deref(),
    )
    .await?;

    Ok(Json(buckets))
}

/// GET /api/customers
///
/// List customer summaries with optional name search and sort mode.
pub async fn list_customers(
    State(state): State<AppState>,
    Query(query): Query<CustomersQuery>,
) -> HandlerResult<Vec<CustomerSummary>> {
    let summaries = db_services::customer_summaries(
        state.repository.as_ref(),
        query.sort_by,
        query.name.as_deref(),
    )
    .await?;

    Ok(Json(summaries))
}

/// GET /api/customers/{customer_id}/purchases
///
/// Get the itemized purchase history of one customer.
pub async fn customer_purchases(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> HandlerResult<Vec<PurchaseDetail>> {
    let customer_id = CustomerId::new(customer_id);

    let details =
        db_services::customer_purchase_details(state.repository.as_ref(), &customer_id).await?;

    Ok(Json(details))
}
