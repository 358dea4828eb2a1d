//! Tenant pages
//!
//! Serves whatever the host dispatch middleware rewrote to
//! `/<hostname>/...`. Without the rewrite marker the request came in on a
//! platform host and there is no tenant to serve.

use axum::{extract::State, Extension, Json};
use serde::Serialize;
use tenantgate_shared::{TenantHostname, TenantProfile};

use crate::{
    error::{ApiError, ApiResult},
    routing::TenantHost,
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct TenantPageResponse {
    pub domain: String,
    /// Path the visitor requested on the tenant's domain
    pub path: String,
    pub profile: TenantProfile,
}

pub async fn tenant_page(
    State(state): State<AppState>,
    tenant: Option<Extension<TenantHost>>,
) -> ApiResult<Json<TenantPageResponse>> {
    let Some(Extension(tenant)) = tenant else {
        return Err(ApiError::NotFound);
    };

    let host = TenantHostname::parse(&tenant.hostname).map_err(|_| ApiError::NotFound)?;
    let profile = state.tenants.profile(&host).await.ok_or(ApiError::NotFound)?;

    Ok(Json(TenantPageResponse {
        domain: host.to_string(),
        path: tenant.original_path,
        profile,
    }))
}
