//! Application configuration

use std::env;
use std::net::Ipv4Addr;
use std::time::Duration;

use tenantgate_shared::{is_valid_hostname, normalize_hostname};

use crate::domains::DnsTargets;
use crate::provider::ProviderConfig;
use crate::routing::RoutingConfig;

/// Default Vercel REST API base
pub const DEFAULT_VERCEL_API_URL: &str = "https://api.vercel.com";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,

    // Host routing
    pub root_domain: String, // e.g., "platform.com"; requests for it serve the dashboard
    pub platform_hosts: Vec<String>,
    pub dev_hosts: Vec<String>,
    pub preview_suffix: String,

    // Vercel (domain provisioning)
    pub vercel_api_url: String,
    pub vercel_api_token: Option<String>,
    pub vercel_project_id: Option<String>,
    pub vercel_team_id: Option<String>,
    pub provider_timeout_ms: u64,

    // DNS instructions shown to tenants
    pub dns_cname_target: String,
    pub dns_apex_ip: Ipv4Addr,
}

impl Config {
    /// Configuration with defaults for everything except the root domain
    pub fn with_root_domain(root_domain: impl Into<String>) -> Self {
        let targets = DnsTargets::default();
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            root_domain: normalize_hostname(&root_domain.into()),
            platform_hosts: Vec::new(),
            dev_hosts: vec!["localhost:3000".to_string(), "localhost".to_string()],
            preview_suffix: ".vercel.app".to_string(),
            vercel_api_url: DEFAULT_VERCEL_API_URL.to_string(),
            vercel_api_token: None,
            vercel_project_id: None,
            vercel_team_id: None,
            provider_timeout_ms: 10_000,
            dns_cname_target: targets.cname_target,
            dns_apex_ip: targets.apex_ip,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let root_domain = env::var("ROOT_DOMAIN")
            .or_else(|_| env::var("NEXT_PUBLIC_ROOT_DOMAIN"))
            .map_err(|_| ConfigError::Missing("ROOT_DOMAIN"))?;
        let root_domain = normalize_hostname(&root_domain);
        if !is_valid_hostname(&root_domain) {
            return Err(ConfigError::Invalid("ROOT_DOMAIN", root_domain));
        }

        let mut config = Self::with_root_domain(root_domain);

        if let Ok(bind_address) = env::var("BIND_ADDRESS") {
            config.bind_address = bind_address;
        }

        if let Ok(hosts) = env::var("PLATFORM_HOSTS") {
            config.platform_hosts = parse_list(&hosts);
        }
        if let Ok(hosts) = env::var("DEV_HOSTS") {
            config.dev_hosts = parse_list(&hosts);
        }
        if let Ok(suffix) = env::var("PREVIEW_SUFFIX") {
            config.preview_suffix = suffix.trim().to_ascii_lowercase();
        }

        if let Ok(url) = env::var("VERCEL_API_URL") {
            config.vercel_api_url = url;
        }
        config.vercel_api_token = non_empty_var("VERCEL_API_TOKEN");
        config.vercel_project_id = non_empty_var("VERCEL_PROJECT_ID");
        config.vercel_team_id = non_empty_var("VERCEL_TEAM_ID");
        config.provider_timeout_ms = env::var("PROVIDER_TIMEOUT_MS")
            .unwrap_or_else(|_| "10000".to_string())
            .parse()
            .unwrap_or(10_000);

        if let Some(target) = non_empty_var("DNS_CNAME_TARGET") {
            config.dns_cname_target = normalize_hostname(&target);
        }
        if let Some(ip) = non_empty_var("DNS_APEX_IP") {
            config.dns_apex_ip = ip
                .parse()
                .map_err(|_| ConfigError::Invalid("DNS_APEX_IP", ip))?;
        }

        Ok(config)
    }

    pub fn routing_config(&self) -> RoutingConfig {
        RoutingConfig::new(
            &self.root_domain,
            &self.platform_hosts,
            &self.dev_hosts,
            &self.preview_suffix,
        )
    }

    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            api_url: self.vercel_api_url.clone(),
            api_token: self.vercel_api_token.clone(),
            project_id: self.vercel_project_id.clone(),
            team_id: self.vercel_team_id.clone(),
            timeout: Duration::from_millis(self.provider_timeout_ms),
        }
    }

    pub fn dns_targets(&self) -> DnsTargets {
        DnsTargets {
            cname_target: self.dns_cname_target.clone(),
            apex_ip: self.dns_apex_ip,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
