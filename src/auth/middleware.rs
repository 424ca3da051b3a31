//! Axum middleware enforcing an [`AccessPolicy`].

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use super::{AccessPolicy, Decision, Denial};
use crate::api::ApiError;

/// Reject requests to protected prefixes that lack a valid bearer token.
///
/// Denied requests never reach the router; everything else is forwarded
/// unmodified. A header that is not valid UTF-8 counts as malformed.
pub async fn require_bearer(
    State(policy): State<Arc<AccessPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default());

    match policy.evaluate(request.uri().path(), authorization) {
        Decision::Open => next.run(request).await,
        Decision::Granted => {
            debug!(path = %request.uri().path(), "Bearer token accepted");
            next.run(request).await
        }
        Decision::Denied(denial) => {
            warn!(path = %request.uri().path(), ?denial, "Request rejected by bearer gate");
            match denial {
                Denial::MissingCredentials => ApiError::Unauthorized.into_response(),
                Denial::InvalidToken => ApiError::Forbidden.into_response(),
            }
        }
    }
}
