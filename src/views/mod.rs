pub mod route_finder;
pub mod route_results;
pub mod footer;

pub use route_finder::{RouteFinderWidget, WidgetIds};
pub use route_results::render_results;
pub use footer::render_current_year;
