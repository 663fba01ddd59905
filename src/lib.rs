//! # CPA Rust Backend
//!
//! Purchase analytics engine for a small commerce dataset.
//!
//! This crate provides a Rust backend answering analytical questions over
//! customers, products, and purchases: how purchases distribute across fixed
//! price bands, a searchable and sortable per-customer spend summary, and the
//! itemized purchase history of a single customer. The backend exposes a REST
//! API via Axum for the React frontend.
//!
//! ## Features
//!
//! - **Price-band frequency**: quantity-weighted purchase counts per fixed price band
//! - **Customer summaries**: per-customer purchase count and total spend with search and sort
//! - **Purchase details**: one customer's purchases joined to product data
//! - **Date Handling**: ISO 8601 date-range validation for windowed queries
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`db`]: Data access, repository pattern, and dataset loading
//! - [`services`]: Query logic (validation, classification, joins, aggregation)
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`routes`]: Route-specific data types

pub mod api;

pub mod db;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
