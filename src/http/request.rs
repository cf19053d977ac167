//! Request identity.
//!
//! # Responsibilities
//! - Generate a unique request id (UUID v4) as early as possible
//! - Propagate the id back to the client on the response
//!
//! # Design Decisions
//! - The id lives in the `x-request-id` header and flows through the
//!   trace layer, so every log line for a request can be correlated

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request id.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates a fresh UUID v4 request id for each incoming request.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}
