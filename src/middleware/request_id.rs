//! Request-id middleware: validates or generates a correlation id per request.
//!
//! A client-supplied `X-Request-ID` is reused verbatim when it is a
//! well-formed UUIDv4, so correlation survives the browser → edge → backend
//! hop. Anything else (absent, malformed, wrong version or variant nibble)
//! silently falls back to a freshly generated id; resolution never fails.
//! The resolved id is stored in the task-local [`crate::context`], attached
//! to the request span, and written to the response header on the way out.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::context::{self, RequestContext};

/// Header carrying the correlation id, both directions.
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Extension type for handlers that want the id without touching the
/// task-local context.
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Outermost middleware of every route: establishes the request context
/// before any other handler runs and echoes the id on the response.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let candidate = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok());
    let request_id = resolve_request_id(candidate);

    // Add to request extensions for handlers to access
    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let span = tracing::info_span!("request", request_id = %request_id);
    let ctx = RequestContext::new(request_id.clone());

    let mut response = context::scope(ctx, next.run(request).instrument(span)).await;

    // The backend-resolved value always wins, even over an upstream proxy.
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER.clone(), value);
    }

    response
}

/// Reuse a valid client-supplied id, otherwise generate.
fn resolve_request_id(candidate: Option<&str>) -> String {
    match candidate {
        Some(value) if is_valid_uuid_v4(value) => value.to_string(),
        _ => Uuid::new_v4().to_string(),
    }
}

/// Full-match UUIDv4 grammar: 8-4-4-4-12 hex groups, version nibble `4`,
/// variant nibble in `{8, 9, a, b}`. Hex digits may be either case.
///
/// Deliberately stricter than `Uuid::parse_str`, which also accepts braced,
/// simple, and URN forms that must not leak into the response header.
pub fn is_valid_uuid_v4(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 36 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, &b)| match i {
        8 | 13 | 18 | 23 => b == b'-',
        14 => b == b'4',
        19 => matches!(b, b'8' | b'9' | b'a' | b'b' | b'A' | b'B'),
        _ => b.is_ascii_hexdigit(),
    })
}
