//! Domain lifecycle errors

use axum::http::StatusCode;
use tenantgate_shared::TenantGateError;

/// Message shown when the provider could not be reached at all
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Could not reach the domain provider. Please try again.";

/// Message shown when the provider accepted a request but its reply was
/// unreadable. Resubmitting would conflict, so point at a status check.
pub const UNREADABLE_RESPONSE_MESSAGE: &str =
    "The domain provider accepted the request but its response could not be read. Check the domain status before retrying.";

/// Every way a domain operation can fail.
///
/// `Display` is always non-empty operator-facing text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// The caller's input was wrong; never retried.
    #[error("{0}")]
    Validation(String),

    /// The service is misconfigured (e.g. provider credentials missing).
    #[error("{0}")]
    Configuration(String),

    /// The provider answered and rejected the request.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// The provider was unreachable. The detail is for logs only.
    #[error("{}", TRANSPORT_FAILURE_MESSAGE)]
    Transport(String),

    /// The provider answered 2xx with a body that could not be parsed. The
    /// operation may have taken effect upstream. The detail is for logs only.
    #[error("{}", UNREADABLE_RESPONSE_MESSAGE)]
    UnreadableResponse(String),
}

impl DomainError {
    /// Build an upstream rejection. The provider's status is kept when
    /// present (400 otherwise) and its message is used verbatim when
    /// non-empty.
    pub fn upstream(status: Option<u16>, message: Option<String>, fallback: &str) -> Self {
        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        DomainError::Upstream {
            status: status.unwrap_or(400),
            message,
        }
    }

    /// HTTP status this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DomainError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_REQUEST)
            }
            DomainError::Transport(_) | DomainError::UnreadableResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    /// Stable machine-readable code for clients
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation(_) => "VALIDATION_ERROR",
            DomainError::Configuration(_) => "CONFIGURATION_ERROR",
            DomainError::Upstream { .. } => "UPSTREAM_ERROR",
            DomainError::Transport(_) => "PROVIDER_UNREACHABLE",
            DomainError::UnreadableResponse(_) => "PROVIDER_RESPONSE_UNREADABLE",
        }
    }
}

impl From<TenantGateError> for DomainError {
    fn from(err: TenantGateError) -> Self {
        match err {
            TenantGateError::EmptyHostname => DomainError::Validation(err.to_string()),
            TenantGateError::InvalidHostname(domain) => DomainError::Validation(format!(
                "Invalid domain format: '{}'. Please enter a valid domain like 'store.company.com'",
                domain
            )),
        }
    }
}
