// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here, just `POST /routes/find` and error-body decoding.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use crate::models::{ApiErrorBody, Route, RouteRequest};
use crate::services::route_lookup::{LookupError, RouteLookup};

/// Fallback when the backend error body is not JSON
pub const UNREADABLE_ERROR_BODY: &str = "An unknown error occurred.";

/// HTTP client for the route-finding backend
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn find_routes_url(&self) -> String {
        format!("{}/routes/find", self.base_url)
    }
}

/// Builds the error for a non-success response from its raw body
pub fn error_from_body(status: u16, body: Option<&str>) -> LookupError {
    let message = match body.map(serde_json::from_str::<ApiErrorBody>) {
        Some(Ok(parsed)) => parsed.error,
        _ => Some(UNREADABLE_ERROR_BODY.to_string()),
    };
    LookupError::Http { status, message }
}

#[async_trait(?Send)]
impl RouteLookup for ApiClient {
    async fn find_routes(&self, request: &RouteRequest) -> Result<Vec<Route>, LookupError> {
        let url = self.find_routes_url();
        log::info!("🌐 [API] POST {} ({} -> {})", url, request.origin, request.destination);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| LookupError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.ok();
            log::warn!("⚠️ [API] HTTP {} {}", status, response.status_text());
            return Err(error_from_body(status, body.as_deref()));
        }

        let routes = response
            .json::<Vec<Route>>()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))?;

        log::info!("✅ [API] {} routes received", routes.len());
        Ok(routes)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
