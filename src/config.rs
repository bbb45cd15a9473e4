use prometheus::Registry;

/// Default latency bucket upper bounds, in seconds.
///
/// This is the Prometheus default ladder. For accuracy, buckets should
/// mirror the latency distribution of the instrumented service; override
/// them with [`MetricsConfig::with_buckets`] when this spread is too coarse.
pub const DEFAULT_LATENCY_BUCKETS: [f64; 11] =
    [0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0];

/// Configuration for [`RequestMetrics`](crate::registry::RequestMetrics).
///
/// `service` should be unique to each tracked service; it becomes the value
/// of the constant `service` label on both instruments. The registry and
/// bucket ladder are optional.
#[derive(Clone)]
pub struct MetricsConfig {
    /// Service identity attached to every observation.
    pub service: String,
    /// Registry to register the instruments against. `None` uses the
    /// process-wide default registry.
    pub registry: Option<Registry>,
    /// Histogram bucket upper bounds in seconds. Empty selects
    /// [`DEFAULT_LATENCY_BUCKETS`].
    pub buckets: Vec<f64>,
}

impl MetricsConfig {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            registry: None,
            buckets: Vec::new(),
        }
    }

    /// Register against an explicit registry instead of the process-wide
    /// default. Tests and multi-registry setups use this for isolation.
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Override the latency bucket ladder (upper bounds, in seconds,
    /// monotonically increasing).
    pub fn with_buckets(mut self, buckets: impl Into<Vec<f64>>) -> Self {
        self.buckets = buckets.into();
        self
    }

    /// The effective bucket ladder: configured bounds, or the default
    /// ladder when none were supplied.
    pub(crate) fn latency_buckets(&self) -> Vec<f64> {
        if self.buckets.is_empty() {
            DEFAULT_LATENCY_BUCKETS.to_vec()
        } else {
            self.buckets.clone()
        }
    }
}
