//! Upstream domain provider
//!
//! The orchestrator only sees the [`DomainProvider`] capability, so it can
//! be exercised against a substitute without network access.

mod vercel;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tenantgate_shared::TenantHostname;

use crate::domains::DomainError;

pub use vercel::VercelClient;

/// Credentials and endpoint for the provider API
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_url: String,
    pub api_token: Option<String>,
    pub project_id: Option<String>,
    pub team_id: Option<String>,
    /// Bound on each outbound call
    pub timeout: Duration,
}

/// Domain binding and verification as offered by a hosting provider.
///
/// Each method performs exactly one outbound call and never retries.
#[async_trait]
pub trait DomainProvider: Send + Sync {
    /// Provider name shown to operators, e.g. "Vercel"
    fn name(&self) -> &'static str;

    /// Bind `domain` to the configured project. Returns the raw provider payload.
    async fn add_domain(&self, domain: &TenantHostname) -> Result<Value, DomainError>;

    /// Read the current configuration/verification state of `domain`.
    async fn get_status(&self, domain: &TenantHostname) -> Result<Value, DomainError>;
}
