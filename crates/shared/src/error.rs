//! Error types for TenantGate

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TenantGateError {
    #[error("Domain is required")]
    EmptyHostname,

    #[error("Invalid domain format: {0}")]
    InvalidHostname(String),
}
