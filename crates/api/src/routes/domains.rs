//! Custom domain routes
//!
//! These routes let tenant operators connect a domain (e.g.
//! store.company.com) and watch it move through verification.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tenantgate_shared::{DnsRecord, DomainProvisionRequest, DomainProvisionResult};

use crate::{error::ApiResult, error::ApiError, state::AppState};

// ============================================================================
// Types
// ============================================================================

/// Response for domain operations: the provision result plus the DNS
/// records to publish for the domain
#[derive(Debug, Serialize)]
pub struct DomainResponse {
    #[serde(flatten)]
    pub result: DomainProvisionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_records: Option<Vec<DnsRecord>>,
}

#[derive(Debug, Deserialize)]
pub struct DomainQuery {
    pub domain: Option<String>,
}

// ============================================================================
// Route handlers
// ============================================================================

/// Submit a domain to the provider
pub async fn add_domain(
    State(state): State<AppState>,
    payload: Result<Json<DomainProvisionRequest>, JsonRejection>,
) -> ApiResult<Json<DomainResponse>> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let result = state.orchestrator.add_domain(&req).await?;

    // Already validated by add_domain
    let domain = state.orchestrator.validate(&req.domain)?;

    if let Some(profile) = req.profile {
        tracing::info!(domain = %domain, "Binding submitted profile to new domain");
        state.tenants.bind(&domain, profile).await;
    }

    Ok(Json(DomainResponse {
        result,
        dns_records: Some(state.orchestrator.dns_records_for(&domain)),
    }))
}

/// Current verification state of a domain (`?domain=`)
pub async fn domain_status(
    State(state): State<AppState>,
    query: Result<Query<DomainQuery>, QueryRejection>,
) -> ApiResult<Json<DomainResponse>> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let raw = query.domain.unwrap_or_default();

    let result = state.orchestrator.get_domain_status(&raw).await?;
    let domain = state.orchestrator.validate(&raw)?;

    Ok(Json(DomainResponse {
        result,
        dns_records: Some(state.orchestrator.dns_records_for(&domain)),
    }))
}

/// DNS records for a domain without contacting the provider (`?domain=`)
pub async fn dns_records(
    State(state): State<AppState>,
    query: Result<Query<DomainQuery>, QueryRejection>,
) -> ApiResult<Json<DomainResponse>> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let domain = state
        .orchestrator
        .validate(query.domain.as_deref().unwrap_or_default())?;

    Ok(Json(DomainResponse {
        result: DomainProvisionResult::ok(
            format!("Add the following record to the DNS settings for {}", domain),
            None,
        ),
        dns_records: Some(state.orchestrator.dns_records_for(&domain)),
    }))
}
