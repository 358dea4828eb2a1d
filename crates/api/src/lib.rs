//! TenantGate API Library
//!
//! Host-based tenant routing and custom domain provisioning for a
//! multi-tenant site platform.

pub mod config;
pub mod domains;
pub mod error;
pub mod provider;
pub mod routes;
pub mod routing;
pub mod state;
pub mod tenants;

pub use config::Config;
pub use domains::{DomainError, DomainOrchestrator};
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use routing::{HostResolver, RoutingConfig};
pub use state::AppState;
