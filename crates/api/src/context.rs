use axum::http::HeaderValue;
use uuid::Uuid;

/// Response header carrying the request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request correlation id, recorded on the request span and echoed in
/// the response headers by the tracing middleware.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Time-ordered (UUIDv7), so ids sort by arrival.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn to_header_value(&self) -> HeaderValue {
        // A hyphenated UUID is always visible ASCII.
        HeaderValue::from_str(&self.0.to_string()).unwrap_or_else(|_| HeaderValue::from_static("invalid"))
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for RequestId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
