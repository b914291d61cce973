pub mod route_finder_viewmodel;

pub use route_finder_viewmodel::{
    classify_and_render, group_routes, normalize_code, validate_search, ResultsView, RouteBucket,
    RouteFinderViewModel, RouteGroups, RouteRow, RouteTable, SearchError,
};
