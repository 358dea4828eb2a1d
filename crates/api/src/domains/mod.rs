//! Custom domain lifecycle
//!
//! Submitting a tenant domain to the hosting provider, reading back its
//! verification state, and deriving the DNS records the tenant must publish.

mod dns;
mod error;
mod orchestrator;

pub use dns::{dns_records_for, registrable_root, DnsTargets, DEFAULT_APEX_IP, DEFAULT_CNAME_TARGET};
pub use error::{DomainError, TRANSPORT_FAILURE_MESSAGE, UNREADABLE_RESPONSE_MESSAGE};
pub use orchestrator::DomainOrchestrator;
