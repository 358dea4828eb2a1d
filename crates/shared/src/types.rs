//! Common types used across TenantGate

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Routing
// =============================================================================

/// Outcome of classifying one inbound request by its Host header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoutingDecision {
    /// Platform traffic: serve the request as-is
    PassThrough,
    /// Tenant traffic: serve `target_path` instead of the original path
    Rewrite { target_path: String },
}

impl RoutingDecision {
    pub fn is_rewrite(&self) -> bool {
        matches!(self, RoutingDecision::Rewrite { .. })
    }

    pub fn target_path(&self) -> Option<&str> {
        match self {
            RoutingDecision::PassThrough => None,
            RoutingDecision::Rewrite { target_path } => Some(target_path),
        }
    }
}

// =============================================================================
// DNS instructions
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DnsRecordType {
    #[serde(rename = "CNAME")]
    Cname,
    A,
}

/// A record the tenant must publish at their registrar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    pub name: String,
    pub value: String,
}

// =============================================================================
// Domain provisioning
// =============================================================================

/// Body of a domain submission
#[derive(Debug, Clone, Deserialize)]
pub struct DomainProvisionRequest {
    #[serde(default)]
    pub domain: String,
    /// Profile to bind to the domain once it has been added upstream
    #[serde(default)]
    pub profile: Option<TenantProfile>,
}

impl DomainProvisionRequest {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            profile: None,
        }
    }
}

/// Stable response contract for domain operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainProvisionResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl DomainProvisionResult {
    pub fn ok(message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }

    /// A failed result. An empty message is replaced so callers always have
    /// operator-facing text.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "Request failed".to_string()
        } else {
            message
        };
        Self {
            success: false,
            message,
            data: None,
        }
    }
}

// =============================================================================
// Tenant content
// =============================================================================

/// Public profile served on a tenant's hostname
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantProfile {
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub links: Vec<TenantLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantLink {
    pub id: String,
    pub title: String,
    pub url: String,
}
