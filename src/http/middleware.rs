//! Middleware chain assembly.
//!
//! The chain is driven by [`MiddlewareConfig`]: each optional behavior is
//! named there and installed only when enabled. With everything disabled
//! the router passes through untouched.
//!
//! Layers wrap outside-in as they are added, so request logging is added
//! last and observes what every other layer does.

use axum::http::header::{
    HeaderValue, REFERRER_POLICY, STRICT_TRANSPORT_SECURITY, X_CONTENT_TYPE_OPTIONS,
    X_FRAME_OPTIONS, X_XSS_PROTECTION,
};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::MiddlewareConfig;

/// Apply the configured middleware to a router.
pub fn apply(mut router: Router, config: &MiddlewareConfig) -> Router {
    if config.security_headers {
        router = security_headers(router);
    }
    if config.cors {
        router = router.layer(CorsLayer::permissive());
    }
    if config.request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }
    router
}

/// Standard security response headers.
///
/// `if_not_present` keeps a handler-set header authoritative. The strict
/// transport header carries a 180-day max-age; browsers ignore it on plain
/// HTTP, so sending it unconditionally is harmless.
fn security_headers(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::if_not_present(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            X_XSS_PROTECTION,
            HeaderValue::from_static("0"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=15552000; includeSubDomains"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
}
