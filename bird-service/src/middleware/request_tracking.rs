//! Request tracking middleware
//!
//! Every request gets an `x-request-id` (kept if the client sent one),
//! the id is echoed on the response, and credentials are masked in traces.

use http::{HeaderName, HeaderValue, Request};
use mti::prelude::*;
use tower_http::{
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    sensitive_headers::SetSensitiveRequestHeadersLayer,
};

/// Prefix of generated request IDs
pub const REQUEST_ID_PREFIX: &str = "req";

/// Sensitive headers that should be masked in logs
pub const SENSITIVE_HEADERS: &[&str] = &[
    "authorization",
    "cookie",
    "set-cookie",
    "x-api-key",
    "x-auth-token",
];

/// Generates TypeID request IDs (`req_<base32 uuidv7>`), sortable by time
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeTypedRequestId;

impl MakeRequestId for MakeTypedRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = REQUEST_ID_PREFIX.create_type_id::<V7>();
        let header_value = HeaderValue::from_str(id.as_str()).ok()?;
        Some(RequestId::new(header_value))
    }
}

/// Set `x-request-id` on incoming requests that lack one
pub fn request_id_layer() -> SetRequestIdLayer<MakeTypedRequestId> {
    SetRequestIdLayer::x_request_id(MakeTypedRequestId)
}

/// Copy `x-request-id` from the request onto the response
pub fn request_id_propagation_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}

/// Mark credential headers as sensitive so trace output hides them
pub fn sensitive_headers_layer() -> SetSensitiveRequestHeadersLayer {
    SetSensitiveRequestHeadersLayer::new(
        SENSITIVE_HEADERS.iter().copied().map(HeaderName::from_static),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_typed_request_id() {
        let mut maker = MakeTypedRequestId;
        let request = Request::builder().body(()).unwrap();

        let header_value = maker.make_request_id(&request).unwrap().into_header_value();
        let id_str = header_value.to_str().unwrap();

        assert!(id_str.starts_with("req_"));
        // prefix (3) + underscore (1) + suffix (26)
        assert_eq!(id_str.len(), 30);
    }

    #[test]
    fn test_request_ids_are_unique() {
        let mut maker = MakeTypedRequestId;
        let request = Request::builder().body(()).unwrap();

        let first = maker.make_request_id(&request).unwrap().into_header_value();
        let second = maker.make_request_id(&request).unwrap().into_header_value();
        assert_ne!(first, second);
    }

    #[test]
    fn test_sensitive_headers_constant() {
        assert!(SENSITIVE_HEADERS.contains(&"authorization"));
        assert!(SENSITIVE_HEADERS.contains(&"x-api-key"));
        for name in SENSITIVE_HEADERS {
            assert!(name.parse::<HeaderName>().is_ok());
        }
    }
}
