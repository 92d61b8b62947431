//! Response hardening: fixed security headers on every response and an
//! optional plain-http to https redirect.

use axum::{
    extract::{Request, State},
    http::{
        header::{self, HeaderValue},
        StatusCode,
    },
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

pub const FRAME_OPTIONS: &str = "SAMEORIGIN";
pub const CONTENT_TYPE_OPTIONS: &str = "nosniff";
pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; object-src 'none'";
pub const REFERRER_POLICY: &str = "strict-origin-when-cross-origin";

/// Whether plain-http requests are redirected to https.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpsPolicy {
    pub force_https: bool,
}

impl From<&configs::SecurityConfig> for HttpsPolicy {
    fn from(cfg: &configs::SecurityConfig) -> Self {
        Self { force_https: cfg.force_https }
    }
}

/// Extension trait for `axum::`[`Router`] to apply the security middleware.
pub trait RouterSecurityExt {
    /// Layers https enforcement, then the four fixed headers around it so
    /// redirects and errors carry them too.
    fn with_security(self, policy: HttpsPolicy) -> Self;
}

impl RouterSecurityExt for Router {
    fn with_security(self, policy: HttpsPolicy) -> Self {
        self.layer(middleware::from_fn_with_state(policy, enforce_https))
            .layer(SetResponseHeaderLayer::overriding(
                header::X_FRAME_OPTIONS,
                HeaderValue::from_static(FRAME_OPTIONS),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static(CONTENT_TYPE_OPTIONS),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::CONTENT_SECURITY_POLICY,
                HeaderValue::from_static(CONTENT_SECURITY_POLICY),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::REFERRER_POLICY,
                HeaderValue::from_static(REFERRER_POLICY),
            ))
    }
}

async fn enforce_https(State(policy): State<HttpsPolicy>, req: Request, next: Next) -> Response {
    if !policy.force_https || is_https(&req) {
        return next.run(req).await;
    }
    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .or_else(|| req.uri().host())
        .unwrap_or("localhost");
    let path = req.uri().path_and_query().map(|p| p.as_str()).unwrap_or("/");
    let location = format!("https://{host}{path}");
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// Trusts `X-Forwarded-Proto` from a terminating proxy, else the URI scheme.
fn is_https(req: &Request) -> bool {
    if let Some(proto) = req.headers().get("x-forwarded-proto").and_then(|v| v.to_str().ok()) {
        return proto
            .split(',')
            .next()
            .map(|p| p.trim().eq_ignore_ascii_case("https"))
            .unwrap_or(false);
    }
    req.uri().scheme_str() == Some("https")
}
