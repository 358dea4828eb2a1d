//! Host dispatch middleware
//!
//! Runs the [`HostResolver`] in front of the router. Tenant requests have
//! their URI replaced with the tenant-scoped path before routing happens;
//! the client keeps seeing its original URL.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tenantgate_shared::RoutingDecision;

use super::HostResolver;
use crate::error::ApiError;

/// Request extension set on rewritten tenant requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantHost {
    /// Normalized tenant hostname (first segment of the rewritten path)
    pub hostname: String,
    /// Path and query the client actually requested
    pub original_path: String,
}

/// Classify the request by Host and apply the resulting decision.
///
/// Must wrap the router as a whole (not individual routes) so the rewritten
/// URI is what the router matches on.
pub async fn host_dispatch(
    State(resolver): State<Arc<HostResolver>>,
    mut request: Request,
    next: Next,
) -> Response {
    let host = request_host(&request);
    let original_path = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| "/".to_string());

    match resolver.resolve(host.as_deref(), &original_path) {
        Ok(RoutingDecision::PassThrough) => next.run(request).await,
        Ok(RoutingDecision::Rewrite { target_path }) => {
            let uri = match target_path.parse::<Uri>() {
                Ok(uri) => uri,
                Err(e) => {
                    tracing::warn!(target_path = %target_path, error = %e, "Rewritten path is not a valid URI");
                    return ApiError::BadRequest("Invalid request path".to_string()).into_response();
                }
            };

            let hostname = tenant_segment(&target_path).to_string();
            tracing::debug!(
                tenant = %hostname,
                from = %original_path,
                to = %target_path,
                "Rewriting tenant request"
            );

            *request.uri_mut() = uri;
            request.extensions_mut().insert(TenantHost {
                hostname,
                original_path,
            });
            next.run(request).await
        }
        Err(e) => {
            tracing::warn!(host = ?host, error = %e, "Rejecting request with unusable Host header");
            ApiError::BadRequest(e.to_string()).into_response()
        }
    }
}

/// Host header, falling back to the URI authority (HTTP/2 `:authority`)
fn request_host(request: &Request) -> Option<String> {
    request
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or_else(|| request.uri().authority().map(|a| a.as_str().to_string()))
}

fn tenant_segment(target_path: &str) -> &str {
    let rest = target_path.strip_prefix('/').unwrap_or(target_path);
    rest.split(['/', '?']).next().unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RoutingConfig;
    use axum::{body::Body, http::StatusCode, Extension, Router};
    use tower::ServiceExt;

    async fn echo(uri: Uri, tenant: Option<Extension<TenantHost>>) -> String {
        match tenant {
            Some(Extension(t)) => format!("tenant {} {} {}", t.hostname, uri, t.original_path),
            None => format!("platform {}", uri),
        }
    }

    fn app() -> Router {
        let resolver = Arc::new(HostResolver::new(RoutingConfig::new(
            "platform.com",
            &[],
            &["localhost:3000".to_string()],
            ".vercel.app",
        )));
        let inner = Router::new().fallback(echo);
        Router::new()
            .fallback_service(inner)
            .layer(axum::middleware::from_fn_with_state(resolver, host_dispatch))
    }

    async fn send(host: Option<&str>, uri: &str) -> (StatusCode, String) {
        let mut builder = Request::builder().uri(uri);
        if let Some(host) = host {
            builder = builder.header(header::HOST, host);
        }
        let response = app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_tenant_request_is_rewritten() {
        let (status, body) = send(Some("Store.Company.com"), "/links?ref=ig").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            "tenant store.company.com /store.company.com/links?ref=ig /links?ref=ig"
        );
    }

    #[tokio::test]
    async fn test_platform_request_is_untouched() {
        let (status, body) = send(Some("platform.com"), "/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "platform /dashboard");

        let (_, body) = send(Some("localhost:3000"), "/").await;
        assert_eq!(body, "platform /");
    }

    #[tokio::test]
    async fn test_missing_host_is_bad_request() {
        let (status, body) = send(None, "/").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Missing Host header");
    }

    #[test]
    fn test_tenant_segment() {
        assert_eq!(tenant_segment("/shop.example.com/a/b"), "shop.example.com");
        assert_eq!(tenant_segment("/shop.example.com?x=1"), "shop.example.com");
        assert_eq!(tenant_segment("/shop.example.com/"), "shop.example.com");
    }
}
