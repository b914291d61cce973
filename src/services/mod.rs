pub mod route_lookup;
pub mod mock_lookup;
pub mod api_client;

pub use route_lookup::{LookupError, RouteLookup};
pub use mock_lookup::MockRouteLookup;
pub use api_client::ApiClient;
