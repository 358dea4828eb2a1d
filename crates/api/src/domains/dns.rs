//! DNS instructions for a submitted domain
//!
//! Subdomains point at the provider with a CNAME. Apex domains cannot carry
//! a CNAME, so they get an A record to the provider's anycast IP instead.

use std::net::Ipv4Addr;

use tenantgate_shared::{DnsRecord, DnsRecordType, TenantHostname};

/// Vercel's CNAME target for subdomains
pub const DEFAULT_CNAME_TARGET: &str = "cname.vercel-dns.com";

/// Vercel's A record target for apex domains
pub const DEFAULT_APEX_IP: Ipv4Addr = Ipv4Addr::new(76, 76, 21, 21);

/// Fixed provider targets the records point at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsTargets {
    pub cname_target: String,
    pub apex_ip: Ipv4Addr,
}

impl Default for DnsTargets {
    fn default() -> Self {
        Self {
            cname_target: DEFAULT_CNAME_TARGET.to_string(),
            apex_ip: DEFAULT_APEX_IP,
        }
    }
}

/// Records the tenant must publish for `domain`: one CNAME for a subdomain,
/// one A record for an apex domain.
pub fn dns_records_for(domain: &TenantHostname, targets: &DnsTargets) -> Vec<DnsRecord> {
    match subdomain_part(domain.as_str()) {
        Some(name) => vec![DnsRecord {
            record_type: DnsRecordType::Cname,
            name: name.to_string(),
            value: targets.cname_target.clone(),
        }],
        None => vec![DnsRecord {
            record_type: DnsRecordType::A,
            name: "@".to_string(),
            value: targets.apex_ip.to_string(),
        }],
    }
}

/// The registrable domain per the public suffix list, e.g. `company.com`
/// for `store.company.com` or `shop.co.th` for `www.shop.co.th`. A bare
/// public suffix is returned unchanged.
pub fn registrable_root(domain: &str) -> &str {
    psl::domain_str(domain).unwrap_or(domain)
}

/// Leftmost label for a subdomain, or None for an apex domain
fn subdomain_part(domain: &str) -> Option<&str> {
    if registrable_root(domain).len() == domain.len() {
        return None;
    }
    domain.split('.').next()
}
