//! Shared application state

use std::sync::Arc;

use crate::config::Config;
use crate::domains::DomainOrchestrator;
use crate::provider::{DomainProvider, VercelClient};
use crate::routing::HostResolver;
use crate::tenants::{InMemoryTenantDirectory, TenantDirectory};

/// State handed to every handler. Cheap to clone; nothing in it is mutated
/// per request except through the tenant directory.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub resolver: Arc<HostResolver>,
    pub orchestrator: Arc<DomainOrchestrator>,
    pub tenants: Arc<dyn TenantDirectory>,
}

impl AppState {
    /// Build state from configuration, using the Vercel client when
    /// credentials are present and an in-memory tenant directory.
    pub fn new(config: Config) -> Self {
        let provider = VercelClient::from_config(&config.provider_config())
            .map(|client| Arc::new(client) as Arc<dyn DomainProvider>);
        Self::from_parts(config, provider, Arc::new(InMemoryTenantDirectory::new()))
    }

    /// Build state with explicit collaborators
    pub fn from_parts(
        config: Config,
        provider: Option<Arc<dyn DomainProvider>>,
        tenants: Arc<dyn TenantDirectory>,
    ) -> Self {
        let routing = config.routing_config();
        let orchestrator = DomainOrchestrator::new(provider, routing.clone(), config.dns_targets());

        Self {
            resolver: Arc::new(HostResolver::new(routing)),
            orchestrator: Arc::new(orchestrator),
            tenants,
            config: Arc::new(config),
        }
    }
}
