//! HTTP request metrics middleware for axum services.
//!
//! Records, for every completed request, the response status code, HTTP
//! method, matched route template and processing latency into a prometheus
//! counter and histogram, both tagged with a constant `service` label.
//! Partitioning on the route template rather than the raw URL keeps metric
//! cardinality bounded by the number of declared routes.
//!
//! ```no_run
//! use axum::{middleware, routing::get, Router};
//! use request_metrics::{track_requests, MetricsConfig, RequestMetrics};
//!
//! # fn main() -> Result<(), request_metrics::MetricsError> {
//! let metrics = RequestMetrics::new(MetricsConfig::new("billing"))?;
//!
//! let app: Router = Router::new()
//!     .route("/users/:id", get(|| async { "user" }))
//!     .layer(middleware::from_fn_with_state(metrics, track_requests));
//! # let _ = app;
//! # Ok(())
//! # }
//! ```
//!
//! Latencies are recorded in seconds; see
//! [`config::DEFAULT_LATENCY_BUCKETS`] for the default bucket ladder.

pub mod config;
pub mod errors;
pub mod middleware;
pub mod registry;

pub use config::{MetricsConfig, DEFAULT_LATENCY_BUCKETS};
pub use errors::MetricsError;
pub use middleware::track_requests;
pub use registry::RequestMetrics;
