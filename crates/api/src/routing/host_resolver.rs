//! Host-to-Route Classification
//!
//! Decides, from the Host header alone, whether a request is platform
//! traffic (dashboard, management API) or tenant traffic:
//! - Platform: platform.com, www.platform.com, localhost:3000, pr-42.vercel.app
//! - Tenant: store.company.com -> rewritten to /store.company.com/<path>
//!
//! Classification is synchronous and reads only the injected
//! [`RoutingConfig`], so it can run in front of every request.

use std::net::{Ipv4Addr, Ipv6Addr};

use tenantgate_shared::{is_valid_domain, is_valid_hostname, normalize_hostname, RoutingDecision};

/// Path prefixes that are never rewritten, even on tenant hosts
/// (`/health/` also covers the bare `/health` path).
pub const PASSTHROUGH_PATH_PREFIXES: &[&str] = &["/api/", "/_next/", "/_static/", "/_vercel/", "/health/"];

/// Static routing configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingConfig {
    root_domain: String,
    platform_hosts: Vec<String>,
    dev_hosts: Vec<String>,
    preview_suffix: String,
}

impl RoutingConfig {
    /// Build a routing config. All entries are normalized; a preview suffix
    /// without a leading dot gets one so `vercel.app` cannot match `myvercel.app`.
    pub fn new(
        root_domain: &str,
        platform_hosts: &[String],
        dev_hosts: &[String],
        preview_suffix: &str,
    ) -> Self {
        let preview_suffix = normalize_hostname(preview_suffix);
        let preview_suffix = if preview_suffix.is_empty() || preview_suffix.starts_with('.') {
            preview_suffix
        } else {
            format!(".{}", preview_suffix)
        };

        Self {
            root_domain: normalize_hostname(root_domain),
            platform_hosts: platform_hosts.iter().map(|h| normalize_hostname(h)).collect(),
            dev_hosts: dev_hosts.iter().map(|h| h.trim().to_ascii_lowercase()).collect(),
            preview_suffix,
        }
    }

    /// Whether a bare hostname (no port) belongs to the platform itself.
    pub fn is_platform_hostname(&self, hostname: &str) -> bool {
        hostname == self.root_domain
            || self.platform_hosts.iter().any(|h| h == hostname)
            || (!self.preview_suffix.is_empty() && hostname.ends_with(&self.preview_suffix))
    }

    /// Dev hosts with a port match exactly; without a port they match any port.
    fn is_dev_host(&self, host: &ParsedHost) -> bool {
        self.dev_hosts
            .iter()
            .any(|dev| *dev == host.authority() || *dev == host.hostname)
    }
}

/// Stateless Host header classifier
#[derive(Debug, Clone)]
pub struct HostResolver {
    config: RoutingConfig,
}

impl HostResolver {
    pub fn new(config: RoutingConfig) -> Self {
        Self { config }
    }

    /// Classify a request by its Host header.
    ///
    /// Returns:
    /// - Ok(PassThrough) for platform hosts, IP literals and passthrough paths
    /// - Ok(Rewrite) with `/<hostname><path_and_query>` for tenant hosts
    /// - Err for a missing or malformed Host header
    pub fn resolve(
        &self,
        host: Option<&str>,
        path_and_query: &str,
    ) -> Result<RoutingDecision, HostResolveError> {
        let raw = host
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or(HostResolveError::MissingHost)?;
        let host = ParsedHost::parse(raw)?;

        if host.is_ip_literal
            || self.config.is_dev_host(&host)
            || self.config.is_platform_hostname(&host.hostname)
        {
            return Ok(RoutingDecision::PassThrough);
        }

        // A tenant segment always contains a dot, so a rewritten path can
        // never collide with a platform route.
        if !is_valid_domain(&host.hostname) {
            return Err(HostResolveError::InvalidHost(raw.to_string()));
        }

        if is_passthrough_path(path_and_query) {
            return Ok(RoutingDecision::PassThrough);
        }

        let path = if path_and_query.starts_with('/') {
            path_and_query.to_string()
        } else {
            format!("/{}", path_and_query)
        };

        Ok(RoutingDecision::Rewrite {
            target_path: format!("/{}{}", host.hostname, path),
        })
    }
}

/// Host header split into normalized hostname and optional port
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParsedHost {
    hostname: String,
    port: Option<u16>,
    is_ip_literal: bool,
}

impl ParsedHost {
    fn parse(raw: &str) -> Result<Self, HostResolveError> {
        let invalid = || HostResolveError::InvalidHost(raw.to_string());

        // Bracketed IPv6 literal, e.g. [::1]:3000
        if let Some(rest) = raw.strip_prefix('[') {
            let (addr, after) = rest.split_once(']').ok_or_else(invalid)?;
            addr.parse::<Ipv6Addr>().map_err(|_| invalid())?;
            let port = match after {
                "" => None,
                _ => {
                    let port = after.strip_prefix(':').ok_or_else(invalid)?;
                    Some(parse_port(port).ok_or_else(invalid)?)
                }
            };
            return Ok(Self {
                hostname: format!("[{}]", addr.to_ascii_lowercase()),
                port,
                is_ip_literal: true,
            });
        }

        let (name, port) = match raw.rsplit_once(':') {
            Some((name, port)) => (name, Some(parse_port(port).ok_or_else(invalid)?)),
            None => (raw, None),
        };

        let hostname = normalize_hostname(name);
        if hostname.parse::<Ipv4Addr>().is_ok() {
            return Ok(Self {
                hostname,
                port,
                is_ip_literal: true,
            });
        }
        if !is_valid_hostname(&hostname) {
            return Err(invalid());
        }

        Ok(Self {
            hostname,
            port,
            is_ip_literal: false,
        })
    }

    fn authority(&self) -> String {
        match self.port {
            Some(port) => format!("{}:{}", self.hostname, port),
            None => self.hostname.clone(),
        }
    }
}

fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    port.parse().ok()
}

/// Framework internals and root-level files (favicon.ico, robots.txt) are
/// served by the platform regardless of host.
fn is_passthrough_path(path_and_query: &str) -> bool {
    let path = path_and_query.split('?').next().unwrap_or(path_and_query);

    if PASSTHROUGH_PATH_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix) || path == prefix.trim_end_matches('/'))
    {
        return true;
    }

    match path.strip_prefix('/') {
        Some(file) if !file.is_empty() && !file.contains('/') => {
            file.rsplit_once('.').is_some_and(|(stem, ext)| {
                !stem.is_empty() && !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric())
            })
        }
        _ => false,
    }
}

/// Errors that can occur during host classification
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostResolveError {
    #[error("Missing Host header")]
    MissingHost,

    #[error("Invalid Host header: {0}")]
    InvalidHost(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> HostResolver {
        HostResolver::new(RoutingConfig::new(
            "platform.com",
            &["www.platform.com".to_string()],
            &["localhost:3000".to_string()],
            ".vercel.app",
        ))
    }

    fn rewrite(path: &str) -> RoutingDecision {
        RoutingDecision::Rewrite {
            target_path: path.to_string(),
        }
    }

    #[test]
    fn test_platform_hosts_pass_through() {
        let r = resolver();
        for host in [
            "platform.com",
            "PLATFORM.com",
            "platform.com.",
            "platform.com:443",
            "www.platform.com",
            "localhost:3000",
            "my-app-git-main.vercel.app",
        ] {
            assert_eq!(
                r.resolve(Some(host), "/dashboard").unwrap(),
                RoutingDecision::PassThrough,
                "{host} should be platform traffic"
            );
        }
    }

    #[test]
    fn test_tenant_hosts_rewrite() {
        let r = resolver();
        assert_eq!(
            r.resolve(Some("store.company.com"), "/").unwrap(),
            rewrite("/store.company.com/")
        );
        assert_eq!(
            r.resolve(Some("Store.Company.COM."), "/links?ref=ig&x=1").unwrap(),
            rewrite("/store.company.com/links?ref=ig&x=1")
        );
        assert_eq!(
            r.resolve(Some("acme.platform.com"), "/").unwrap(),
            rewrite("/acme.platform.com/"),
            "subdomains of the root are tenants"
        );
        assert_eq!(
            r.resolve(Some("company.com:8443"), "").unwrap(),
            rewrite("/company.com/"),
            "port is not part of the tenant segment"
        );
    }

    #[test]
    fn test_preview_suffix_needs_label_boundary() {
        let r = resolver();
        assert_eq!(
            r.resolve(Some("myvercel.app"), "/").unwrap(),
            rewrite("/myvercel.app/")
        );

        let bare = HostResolver::new(RoutingConfig::new("platform.com", &[], &[], "vercel.app"));
        assert_eq!(
            bare.resolve(Some("pr-7.vercel.app"), "/").unwrap(),
            RoutingDecision::PassThrough
        );
        assert!(bare.resolve(Some("notvercel.app"), "/").unwrap().is_rewrite());
    }

    #[test]
    fn test_dev_host_without_port_matches_any_port() {
        let r = HostResolver::new(RoutingConfig::new(
            "platform.com",
            &[],
            &["localhost".to_string()],
            "",
        ));
        assert_eq!(r.resolve(Some("localhost:8080"), "/").unwrap(), RoutingDecision::PassThrough);
        assert_eq!(r.resolve(Some("localhost"), "/").unwrap(), RoutingDecision::PassThrough);
    }

    #[test]
    fn test_missing_or_malformed_host_is_rejected() {
        let r = resolver();
        assert_eq!(r.resolve(None, "/"), Err(HostResolveError::MissingHost));
        assert_eq!(r.resolve(Some("   "), "/"), Err(HostResolveError::MissingHost));

        for host in [
            "evil.com/../admin",
            "bad host.com",
            "store.company.com:",
            "store.company.com:http",
            "store.company.com:99999",
            "a..b.com",
            "[not-ipv6]",
            "intranet",
        ] {
            assert!(
                matches!(r.resolve(Some(host), "/"), Err(HostResolveError::InvalidHost(_))),
                "{host} should be rejected"
            );
        }
    }

    #[test]
    fn test_ip_literals_pass_through() {
        let r = resolver();
        assert_eq!(r.resolve(Some("10.0.0.5:3000"), "/health").unwrap(), RoutingDecision::PassThrough);
        assert_eq!(r.resolve(Some("[::1]:3000"), "/").unwrap(), RoutingDecision::PassThrough);
    }

    #[test]
    fn test_passthrough_paths_on_tenant_host() {
        let r = resolver();
        for path in ["/api/add-domain", "/_next/static/app.js", "/_static/logo.png", "/favicon.ico", "/robots.txt?x=1", "/health/live"] {
            assert_eq!(
                r.resolve(Some("store.company.com"), path).unwrap(),
                RoutingDecision::PassThrough,
                "{path} should not be rewritten"
            );
        }
        assert!(r.resolve(Some("store.company.com"), "/blog/post.html").unwrap().is_rewrite());
        assert!(r.resolve(Some("store.company.com"), "/links").unwrap().is_rewrite());
        assert!(r.resolve(Some("store.company.com"), "/healthy-recipes").unwrap().is_rewrite());
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let r = resolver();
        let first = r.resolve(Some("shop.example.co.uk"), "/a?b=c");
        let second = r.resolve(Some("shop.example.co.uk"), "/a?b=c");
        assert_eq!(first, second);
    }
}
