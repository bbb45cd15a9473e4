use thiserror::Error;

/// Errors surfaced while bringing the middleware online.
///
/// Construction is the only fallible operation; recording on registered
/// instruments cannot fail. A registration collision is fatal: swallowing
/// it would leave a middleware whose observations are silently dropped for
/// the life of the process.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// The instrument definition was rejected before registration.
    #[error("invalid definition for instrument `{name}`: {source}")]
    Definition {
        name: &'static str,
        #[source]
        source: prometheus::Error,
    },

    /// The registry refused the instrument, typically because another
    /// instrument with the same name and labels is already registered.
    #[error("failed to register instrument `{name}`: {source}")]
    Registration {
        name: &'static str,
        #[source]
        source: prometheus::Error,
    },
}
