use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::registry::RequestMetrics;

/// Middleware that records one counter increment and one histogram
/// observation per completed request.
///
/// Apply it with `axum::middleware::from_fn_with_state` layered on the
/// outermost router, after all routes are declared; `MatchedPath` is not
/// visible to middleware sitting on nested routers.
///
/// The response is returned exactly as the downstream handler produced it.
/// If the handler panics nothing is recorded and the panic propagates to
/// the host server.
pub async fn track_requests(
    State(metrics): State<RequestMetrics>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    // Handle on the routing context; the template string itself is read
    // once the router chain below has completed.
    let matched = request.extensions().get::<MatchedPath>().cloned();

    let response = next.run(request).await;

    // Partition on the matched route template, never the raw URL, so the
    // label space stays bounded by the number of declared routes. Requests
    // that matched no route fall into the empty-string partition.
    let path = matched.as_ref().map(MatchedPath::as_str).unwrap_or("");
    let code = response.status().as_u16().to_string();
    metrics.record(&code, method.as_str(), path, start.elapsed());

    response
}
