//! Hostname normalization and validation
//!
//! Every layer that compares hostnames (edge routing, domain submission,
//! tenant lookup) goes through these helpers so that `Store.Example.COM.`
//! and `store.example.com` are the same tenant.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TenantGateError;

/// Maximum length of a full domain name (RFC 1035)
const MAX_DOMAIN_LEN: usize = 253;

/// Maximum length of a single label (RFC 1035)
const MAX_LABEL_LEN: usize = 63;

/// Normalize a hostname: trim whitespace, lowercase, drop one trailing dot.
///
/// Ports are not handled here; callers that deal with `Host` headers split
/// the port off first.
pub fn normalize_hostname(host: &str) -> String {
    let host = host.trim();
    let host = host.strip_suffix('.').unwrap_or(host);
    host.to_ascii_lowercase()
}

/// Check that a string is a syntactically plausible hostname.
///
/// Single-label names such as `localhost` are accepted.
pub fn is_valid_hostname(host: &str) -> bool {
    if host.is_empty() || host.len() > MAX_DOMAIN_LEN {
        return false;
    }

    host.split('.').all(is_valid_label)
}

/// Check that a string is a domain a tenant could own (at least two labels).
pub fn is_valid_domain(domain: &str) -> bool {
    is_valid_hostname(domain) && domain.contains('.')
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// A normalized, syntactically valid domain submitted for a tenant.
///
/// This type says nothing about ownership or platform membership; the API
/// layer rejects platform hostnames before a value reaches the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TenantHostname(String);

impl TenantHostname {
    pub fn parse(raw: &str) -> Result<Self, TenantGateError> {
        let normalized = normalize_hostname(raw);
        if normalized.is_empty() {
            return Err(TenantGateError::EmptyHostname);
        }
        if !is_valid_domain(&normalized) {
            return Err(TenantGateError::InvalidHostname(raw.trim().to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leftmost label, e.g. `store` for `store.company.com`
    pub fn first_label(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for TenantHostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TenantHostname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TenantHostname {
    type Error = TenantGateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TenantHostname> for String {
    fn from(value: TenantHostname) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hostname() {
        assert_eq!(normalize_hostname("Example.COM"), "example.com");
        assert_eq!(normalize_hostname("example.com."), "example.com");
        assert_eq!(normalize_hostname("  Store.Company.com  "), "store.company.com");
    }

    #[test]
    fn test_is_valid_hostname() {
        assert!(is_valid_hostname("localhost"));
        assert!(is_valid_hostname("store.company.com"));
        assert!(is_valid_hostname("my-shop.example.co.uk"));

        assert!(!is_valid_hostname(""));
        assert!(!is_valid_hostname("a..b"));
        assert!(!is_valid_hostname("-bad.example.com"));
        assert!(!is_valid_hostname("bad-.example.com"));
        assert!(!is_valid_hostname("under_score.example.com"));
        assert!(!is_valid_hostname("evil.com/../admin"));
        assert!(!is_valid_hostname(&"a".repeat(64)));
    }

    #[test]
    fn test_is_valid_domain_requires_two_labels() {
        assert!(is_valid_domain("example.com"));
        assert!(!is_valid_domain("localhost"));
    }

    #[test]
    fn test_tenant_hostname_parse() {
        let host = TenantHostname::parse(" Store.Company.COM. ").unwrap();
        assert_eq!(host.as_str(), "store.company.com");
        assert_eq!(host.first_label(), "store");

        assert_eq!(TenantHostname::parse("   "), Err(TenantGateError::EmptyHostname));
        assert!(matches!(
            TenantHostname::parse("not a domain"),
            Err(TenantGateError::InvalidHostname(_))
        ));
    }

    #[test]
    fn test_tenant_hostname_deserialize_validates() {
        let ok: TenantHostname = serde_json::from_str("\"Shop.Example.com\"").unwrap();
        assert_eq!(ok.as_str(), "shop.example.com");

        let err = serde_json::from_str::<TenantHostname>("\"nope\"");
        assert!(err.is_err());
    }
}
