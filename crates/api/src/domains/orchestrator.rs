//! Domain lifecycle orchestration
//!
//! Validates what an operator submits, refuses to run without provider
//! credentials, and performs exactly one provider call per operation. The
//! orchestrator holds no state between calls and never reads the tenant
//! mapping; it only forwards the hostname it was given.

use std::sync::Arc;

use tenantgate_shared::{DnsRecord, DomainProvisionRequest, DomainProvisionResult, TenantHostname};
use tracing::{info, warn};

use super::dns::{dns_records_for, DnsTargets};
use super::error::DomainError;
use crate::provider::DomainProvider;
use crate::routing::RoutingConfig;

pub struct DomainOrchestrator {
    /// None when provider credentials are not configured
    provider: Option<Arc<dyn DomainProvider>>,
    routing: RoutingConfig,
    dns_targets: DnsTargets,
}

impl DomainOrchestrator {
    pub fn new(
        provider: Option<Arc<dyn DomainProvider>>,
        routing: RoutingConfig,
        dns_targets: DnsTargets,
    ) -> Self {
        Self {
            provider,
            routing,
            dns_targets,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Normalize and validate a submitted domain. Platform hostnames are
    /// rejected: they can never belong to a tenant.
    pub fn validate(&self, raw: &str) -> Result<TenantHostname, DomainError> {
        let domain = TenantHostname::parse(raw)?;
        if self.routing.is_platform_hostname(domain.as_str()) {
            return Err(DomainError::Validation(format!(
                "{} is a platform domain and cannot be assigned to a tenant",
                domain
            )));
        }
        Ok(domain)
    }

    fn provider(&self) -> Result<&Arc<dyn DomainProvider>, DomainError> {
        self.provider.as_ref().ok_or_else(|| {
            tracing::error!("Missing VERCEL_API_TOKEN or VERCEL_PROJECT_ID");
            DomainError::Configuration("Server configuration error".to_string())
        })
    }

    /// Bind a domain to the platform's project.
    ///
    /// Not retried: a second submission of the same domain is reported as a
    /// conflict by the provider. Callers recover from a lost response by
    /// querying status.
    pub async fn add_domain(
        &self,
        req: &DomainProvisionRequest,
    ) -> Result<DomainProvisionResult, DomainError> {
        let domain = self.validate(&req.domain)?;
        let provider = self.provider()?;

        info!(domain = %domain, provider = provider.name(), "Submitting domain");
        let payload = provider.add_domain(&domain).await.inspect_err(|e| {
            warn!(domain = %domain, error = %e, status = %e.status_code(), "Domain submission failed");
        })?;

        Ok(DomainProvisionResult::ok(
            format!(
                "Successfully connected {}! Now point your DNS to {}.",
                domain,
                provider.name()
            ),
            Some(payload),
        ))
    }

    /// Current verification/configuration state as reported upstream.
    /// Read-only and safe to poll.
    pub async fn get_domain_status(&self, domain: &str) -> Result<DomainProvisionResult, DomainError> {
        let domain = self.validate(domain)?;
        let provider = self.provider()?;

        let payload = provider.get_status(&domain).await.inspect_err(|e| {
            warn!(domain = %domain, error = %e, status = %e.status_code(), "Domain status query failed");
        })?;

        Ok(DomainProvisionResult::ok("Domain status retrieved", Some(payload)))
    }

    /// DNS records the tenant must publish. No network access.
    pub fn dns_records_for(&self, domain: &TenantHostname) -> Vec<DnsRecord> {
        dns_records_for(domain, &self.dns_targets)
    }
}
