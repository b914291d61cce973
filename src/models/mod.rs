pub mod route;

pub use route::{ApiErrorBody, Route, RouteRequest, NOT_AVAILABLE};
