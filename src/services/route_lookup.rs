// ============================================================================
// ROUTE LOOKUP - Collaborator contract (backend route-finding service)
// ============================================================================
// The widget only knows this trait. Mock and HTTP implementations live in
// mock_lookup.rs and api_client.rs.
// ============================================================================

use async_trait::async_trait;
use thiserror::Error;
use crate::models::{Route, RouteRequest};

/// Failure reported by a route lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Request never got a response (fetch rejected, CORS, offline...)
    #[error("Network error: {0}")]
    Network(String),
    /// Backend answered with a non-success status
    #[error("HTTP error {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Http { status: u16, message: Option<String> },
    /// Response body was not a route list
    #[error("Parse error: {0}")]
    Parse(String),
    /// Lookup failed without any detail
    #[error("lookup failed")]
    Unknown,
}

impl LookupError {
    /// Human-readable reason to surface in the UI, if any
    pub fn message(&self) -> Option<String> {
        let message = match self {
            LookupError::Network(msg) | LookupError::Parse(msg) => Some(msg.clone()),
            LookupError::Http { status, message } => Some(
                message
                    .clone()
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| format!("HTTP error! status: {}", status)),
            ),
            LookupError::Unknown => None,
        };
        message.filter(|m| !m.trim().is_empty())
    }
}

/// Something that can answer `{origin, destination}` with an ordered route list
#[async_trait(?Send)]
pub trait RouteLookup {
    async fn find_routes(&self, request: &RouteRequest) -> Result<Vec<Route>, LookupError>;

    /// Short label for logs
    fn name(&self) -> &'static str;
}
