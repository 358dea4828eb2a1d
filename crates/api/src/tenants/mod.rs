//! Tenant content lookup
//!
//! Maps a tenant hostname to the profile its public page shows. The real
//! store is an external service; [`InMemoryTenantDirectory`] stands in for
//! it in single-process deployments and tests.

mod directory;

use async_trait::async_trait;
use tenantgate_shared::{TenantHostname, TenantProfile};

pub use directory::{placeholder_profile, InMemoryTenantDirectory};

/// Hostname -> profile mapping owned by the tenant data store
#[async_trait]
pub trait TenantDirectory: Send + Sync {
    /// Profile served on `host`, or None if the host has no tenant
    async fn profile(&self, host: &TenantHostname) -> Option<TenantProfile>;

    /// Attach a profile to `host`, replacing any previous one
    async fn bind(&self, host: &TenantHostname, profile: TenantProfile);
}
