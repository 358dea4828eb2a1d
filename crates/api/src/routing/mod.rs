//! Host-based request dispatch
//!
//! Classifies every inbound request as platform or tenant traffic:
//! - Root domain: platform.com (dashboard, management API)
//! - Preview deployments: my-app-git-main.vercel.app
//! - Tenant domains: store.company.com -> /store.company.com/<path>

mod host_resolver;
mod middleware;

pub use host_resolver::{HostResolveError, HostResolver, RoutingConfig, PASSTHROUGH_PATH_PREFIXES};
pub use middleware::{host_dispatch, TenantHost};
