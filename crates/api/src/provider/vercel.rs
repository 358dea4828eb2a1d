//! Vercel API integration for custom domain provisioning
//!
//! Binds tenant domains to the platform's Vercel project and reads back
//! their verification state. Verification itself happens on Vercel's side;
//! the payloads are passed through untouched.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tenantgate_shared::TenantHostname;
use tracing::{error, info, warn};
use url::Url;

use super::{DomainProvider, ProviderConfig};
use crate::domains::DomainError;

const ADD_DOMAIN_FALLBACK: &str = "Failed to add domain";
const STATUS_FALLBACK: &str = "Failed to check status";

/// Client for the Vercel projects/domains API
#[derive(Clone)]
pub struct VercelClient {
    client: Client,
    api_url: Url,
    api_token: String,
    project_id: String,
    team_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct AddDomainBody<'a> {
    name: &'a str,
}

#[derive(Debug, Deserialize)]
struct VercelErrorBody {
    error: Option<VercelError>,
}

#[derive(Debug, Deserialize)]
struct VercelError {
    code: Option<String>,
    message: Option<String>,
}

impl VercelClient {
    /// Create a client. Fails only if the base URL is unusable or the HTTP
    /// client cannot be built.
    pub fn new(
        config: &ProviderConfig,
        api_token: String,
        project_id: String,
    ) -> Result<Self, DomainError> {
        let api_url = Url::parse(&config.api_url).map_err(|e| {
            DomainError::Configuration(format!("Invalid provider URL '{}': {}", config.api_url, e))
        })?;
        if api_url.cannot_be_a_base() {
            return Err(DomainError::Configuration(format!(
                "Invalid provider URL '{}'",
                config.api_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url,
            api_token,
            project_id,
            team_id: config.team_id.clone(),
        })
    }

    /// Create from config, returns None if credentials are not configured
    pub fn from_config(config: &ProviderConfig) -> Option<Self> {
        match (&config.api_token, &config.project_id) {
            (Some(token), Some(project)) if !token.is_empty() && !project.is_empty() => {
                match Self::new(config, token.clone(), project.clone()) {
                    Ok(client) => Some(client),
                    Err(e) => {
                        error!("Vercel client could not be created: {}", e);
                        None
                    }
                }
            }
            _ => {
                warn!("Missing VERCEL_API_TOKEN or VERCEL_PROJECT_ID - domain provisioning is disabled");
                None
            }
        }
    }

    /// `{api}/{version}/projects/{project}/domains[/{extra}][?teamId=]`
    fn endpoint(&self, version: &str, domain: Option<&str>) -> Url {
        let mut url = self.api_url.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend([version, "projects", self.project_id.as_str(), "domains"]);
            if let Some(domain) = domain {
                segments.push(domain);
            }
        }
        if let Some(team_id) = &self.team_id {
            url.query_pairs_mut().append_pair("teamId", team_id);
        }
        url
    }

    async fn send(
        &self,
        request: RequestBuilder,
        domain: &TenantHostname,
        fallback: &str,
    ) -> Result<Value, DomainError> {
        let response = request
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|e| {
                error!(domain = %domain, error = %e, timeout = e.is_timeout(), "Failed to call Vercel API");
                DomainError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(domain = %domain, error = %e, "Failed to read Vercel response");
            DomainError::Transport(e.to_string())
        })?;

        if status.is_success() {
            if body.trim().is_empty() {
                return Ok(Value::Null);
            }
            return serde_json::from_str(&body).map_err(|e| {
                error!(domain = %domain, error = %e, "Failed to parse Vercel response");
                DomainError::UnreadableResponse(e.to_string())
            });
        }

        let upstream = serde_json::from_str::<VercelErrorBody>(&body)
            .ok()
            .and_then(|b| b.error);
        let code = upstream.as_ref().and_then(|e| e.code.clone());
        let message = upstream.and_then(|e| e.message);

        error!(
            domain = %domain,
            status = status.as_u16(),
            code = ?code,
            message = ?message,
            "Vercel API returned an error"
        );

        Err(DomainError::upstream(Some(status.as_u16()), message, fallback))
    }
}

#[async_trait]
impl DomainProvider for VercelClient {
    fn name(&self) -> &'static str {
        "Vercel"
    }

    async fn add_domain(&self, domain: &TenantHostname) -> Result<Value, DomainError> {
        let url = self.endpoint("v10", None);
        let request = self.client.post(url).json(&AddDomainBody {
            name: domain.as_str(),
        });

        let payload = self.send(request, domain, ADD_DOMAIN_FALLBACK).await?;
        info!(domain = %domain, "Domain added to Vercel project");
        Ok(payload)
    }

    async fn get_status(&self, domain: &TenantHostname) -> Result<Value, DomainError> {
        let url = self.endpoint("v9", Some(domain.as_str()));
        self.send(self.client.get(url), domain, STATUS_FALLBACK).await
    }
}
