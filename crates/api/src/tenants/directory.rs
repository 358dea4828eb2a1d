//! In-memory tenant directory

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tenantgate_shared::{TenantHostname, TenantLink, TenantProfile};
use tracing::warn;

use super::TenantDirectory;

/// Thread-safe in-memory hostname -> profile map
pub struct InMemoryTenantDirectory {
    profiles: RwLock<HashMap<String, TenantProfile>>,
    /// Serve a generated profile for hosts nothing was bound to
    placeholders: bool,
}

impl Default for InMemoryTenantDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTenantDirectory {
    /// Directory that falls back to a generated profile for unbound hosts
    pub fn new() -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
            placeholders: true,
        }
    }

    /// Directory that only serves explicitly bound profiles
    pub fn strict() -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
            placeholders: false,
        }
    }
}

#[async_trait]
impl TenantDirectory for InMemoryTenantDirectory {
    async fn profile(&self, host: &TenantHostname) -> Option<TenantProfile> {
        let bound = match self.profiles.read() {
            Ok(profiles) => profiles.get(host.as_str()).cloned(),
            Err(poisoned) => {
                warn!(host = %host, "Tenant directory lock poisoned, recovering for lookup");
                poisoned.into_inner().get(host.as_str()).cloned()
            }
        };

        match bound {
            Some(profile) => Some(profile),
            None if self.placeholders => Some(placeholder_profile(host)),
            None => None,
        }
    }

    async fn bind(&self, host: &TenantHostname, profile: TenantProfile) {
        match self.profiles.write() {
            Ok(mut profiles) => {
                profiles.insert(host.as_str().to_string(), profile);
            }
            Err(poisoned) => {
                // A writer panicked mid-update; the map itself is still usable
                warn!(host = %host, "Tenant directory lock poisoned, recovering to bind profile");
                poisoned.into_inner().insert(host.as_str().to_string(), profile);
            }
        }
    }
}

/// Generated profile for a host with no bound content: the capitalized
/// first label as name and a link back to the domain itself.
pub fn placeholder_profile(host: &TenantHostname) -> TenantProfile {
    let label = host.first_label();
    let mut chars = label.chars();
    let name = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    TenantProfile {
        name,
        bio: format!("Welcome to the official bio link for {}", host),
        links: vec![
            TenantLink {
                id: "1".to_string(),
                title: "Visit Website".to_string(),
                url: format!("https://{}", host),
            },
            TenantLink {
                id: "2".to_string(),
                title: "Contact Me".to_string(),
                url: "#".to_string(),
            },
            TenantLink {
                id: "3".to_string(),
                title: "Twitter / X".to_string(),
                url: "https://twitter.com".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(domain: &str) -> TenantHostname {
        TenantHostname::parse(domain).unwrap()
    }

    fn profile(name: &str) -> TenantProfile {
        TenantProfile {
            name: name.to_string(),
            bio: "Hand-made ceramics".to_string(),
            links: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_bind_and_lookup() {
        let dir = InMemoryTenantDirectory::strict();
        assert!(dir.profile(&host("store.company.com")).await.is_none());

        dir.bind(&host("Store.Company.com"), profile("Clay Co")).await;
        assert_eq!(
            dir.profile(&host("store.company.com")).await,
            Some(profile("Clay Co"))
        );
        assert!(dir.profile(&host("other.company.com")).await.is_none());
    }

    #[tokio::test]
    async fn test_bind_survives_poisoned_lock() {
        let dir = std::sync::Arc::new(InMemoryTenantDirectory::strict());

        let poisoner = dir.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.profiles.write().unwrap();
            panic!("writer panicked while holding the lock");
        })
        .join();
        assert!(dir.profiles.is_poisoned());

        dir.bind(&host("store.company.com"), profile("Clay Co")).await;
        assert_eq!(
            dir.profile(&host("store.company.com")).await,
            Some(profile("Clay Co"))
        );
    }

    #[tokio::test]
    async fn test_bind_replaces_previous_profile() {
        let dir = InMemoryTenantDirectory::strict();
        dir.bind(&host("a.example.com"), profile("First")).await;
        dir.bind(&host("a.example.com"), profile("Second")).await;
        assert_eq!(dir.profile(&host("a.example.com")).await.unwrap().name, "Second");
    }

    #[tokio::test]
    async fn test_placeholder_for_unbound_host() {
        let dir = InMemoryTenantDirectory::new();
        let generated = dir.profile(&host("store.company.com")).await.unwrap();
        assert_eq!(generated.name, "Store");
        assert_eq!(generated.bio, "Welcome to the official bio link for store.company.com");
        assert_eq!(generated.links.len(), 3);
        assert_eq!(generated.links[0].url, "https://store.company.com");
    }
}
