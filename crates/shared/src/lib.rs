//! TenantGate Shared Types and Utilities
//!
//! This crate contains the wire types, hostname helpers, and errors shared
//! across the TenantGate workspace.

pub mod error;
pub mod hostname;
pub mod types;

pub use error::*;
pub use hostname::{is_valid_domain, is_valid_hostname, normalize_hostname, TenantHostname};
pub use types::*;
