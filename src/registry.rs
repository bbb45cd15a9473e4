use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts};
use std::time::Duration;
use tracing::debug;

use crate::config::MetricsConfig;
use crate::errors::MetricsError;

const REQUEST_COUNT: &str = "request_count";
const REQUEST_LATENCY: &str = "request_latency_seconds";

/// Labels every observation is partitioned by, in label-value order.
const PARTITIONS: [&str; 3] = ["code", "method", "path"];

/// Request counter and latency histogram for one instrumented service.
///
/// Cloning is cheap and yields a handle onto the same underlying
/// instruments; clones are shared across all in-flight requests. Updates
/// are atomic, so no additional locking happens on the request path.
#[derive(Clone)]
pub struct RequestMetrics {
    requests: IntCounterVec,
    latencies: HistogramVec,
}

impl RequestMetrics {
    /// Registers the request counter and latency histogram and returns the
    /// middleware state handle.
    ///
    /// Registration happens exactly once, here. A name collision in the
    /// registry (for example constructing twice for the same service)
    /// fails construction rather than surfacing as missing data at scrape
    /// time. Distinct services may share one registry; their `service`
    /// labels keep the instruments apart.
    pub fn new(config: MetricsConfig) -> Result<Self, MetricsError> {
        let registry = match &config.registry {
            Some(registry) => registry.clone(),
            None => prometheus::default_registry().clone(),
        };
        let buckets = config.latency_buckets();

        let requests = IntCounterVec::new(
            Opts::new(
                REQUEST_COUNT,
                "Request counts, partitioned by status code, method and HTTP path.",
            )
            .const_label("service", config.service.as_str()),
            &PARTITIONS,
        )
        .map_err(|source| MetricsError::Definition {
            name: REQUEST_COUNT,
            source,
        })?;
        registry
            .register(Box::new(requests.clone()))
            .map_err(|source| MetricsError::Registration {
                name: REQUEST_COUNT,
                source,
            })?;

        let latencies = HistogramVec::new(
            HistogramOpts::new(
                REQUEST_LATENCY,
                "Request latencies in seconds, partitioned by status code, method and HTTP path.",
            )
            .const_label("service", config.service.as_str())
            .buckets(buckets.clone()),
            &PARTITIONS,
        )
        .map_err(|source| MetricsError::Definition {
            name: REQUEST_LATENCY,
            source,
        })?;
        registry
            .register(Box::new(latencies.clone()))
            .map_err(|source| MetricsError::Registration {
                name: REQUEST_LATENCY,
                source,
            })?;

        debug!(
            service = %config.service,
            buckets = buckets.len(),
            "Registered request metrics instruments"
        );

        Ok(Self {
            requests,
            latencies,
        })
    }

    /// Records one completed request under its (code, method, path)
    /// partition. Latency is observed in seconds.
    pub(crate) fn record(&self, code: &str, method: &str, path: &str, elapsed: Duration) {
        self.requests.with_label_values(&[code, method, path]).inc();
        self.latencies
            .with_label_values(&[code, method, path])
            .observe(elapsed.as_secs_f64());
    }
}
