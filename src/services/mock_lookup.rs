// ============================================================================
// MOCK ROUTE LOOKUP - Canned routes after a simulated network delay
// ============================================================================

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use crate::models::{Route, RouteRequest};
use crate::services::route_lookup::{LookupError, RouteLookup};

/// Stand-in for the backend until `/routes/find` exists
#[derive(Clone)]
pub struct MockRouteLookup {
    delay_ms: u32,
}

impl MockRouteLookup {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }

    /// Fixed response, independent of the requested pair
    pub fn sample_routes() -> Vec<Route> {
        vec![
            Route::new("JFK.COATE.TEB", "Preferred Route").with_restrictions("TURBOJETS ONLY"),
            Route::new("JFK.DPK.SWL.BOS", "CDR (No Coord)"),
            Route::new("JFK.GAYEL.PUT.MIA", "CDR (Coord Req)").with_justification("AVOID ZNY"),
        ]
    }
}

#[async_trait(?Send)]
impl RouteLookup for MockRouteLookup {
    async fn find_routes(&self, request: &RouteRequest) -> Result<Vec<Route>, LookupError> {
        log::debug!("🧪 [MOCK] {} -> {} (delay {} ms)", request.origin, request.destination, self.delay_ms);
        if self.delay_ms > 0 {
            TimeoutFuture::new(self.delay_ms).await;
        }
        Ok(Self::sample_routes())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn zero_delay_resolves_with_sample_routes() {
        let lookup = MockRouteLookup::new(0);
        let request = RouteRequest {
            origin: "JFK".to_string(),
            destination: "MIA".to_string(),
        };
        let routes = block_on(lookup.find_routes(&request)).unwrap();
        assert_eq!(routes, MockRouteLookup::sample_routes());
        assert_eq!(routes.len(), 3);
    }
}
