// ============================================================================
// ROUTE FINDER VIEWMODEL - Validation, classification, table preparation
// ============================================================================
// No DOM access here. Views turn `ResultsView` into elements.
// ============================================================================

use std::rc::Rc;
use thiserror::Error;
use crate::models::{Route, RouteRequest};
use crate::services::{LookupError, RouteLookup};
use crate::state::SearchState;
use crate::utils::i18n::t;

/// Why a search attempt ended without routes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Origin or destination empty after trimming; the lookup is never called
    #[error("origin and destination are required")]
    Validation,
    /// Lookup rejected or signalled non-success
    #[error("route lookup failed: {}", .0.as_deref().unwrap_or("no details"))]
    Transport(Option<String>),
}

impl From<LookupError> for SearchError {
    fn from(err: LookupError) -> Self {
        SearchError::Transport(err.message())
    }
}

impl SearchError {
    /// Inline message shown in the results area
    pub fn user_message(&self, lang: &str) -> String {
        match self {
            SearchError::Validation => t("origin_destination_required", lang),
            SearchError::Transport(reason) => {
                let reason = reason.clone().unwrap_or_else(|| t("unknown_error", lang));
                format!("{}: {}", t("error_prefix", lang), reason)
            }
        }
    }
}

/// Airport-code-like token: trimmed and upper-cased
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Checks both fields and builds the lookup request
pub fn validate_search(origin: &str, destination: &str) -> Result<RouteRequest, SearchError> {
    let origin = normalize_code(origin);
    let destination = normalize_code(destination);
    if origin.is_empty() || destination.is_empty() {
        return Err(SearchError::Validation);
    }
    Ok(RouteRequest { origin, destination })
}

/// Display group of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteBucket {
    Preferred,
    NoCoordination,
    CoordinationRequired,
    Other,
}

impl RouteBucket {
    /// Display order
    pub const ALL: [RouteBucket; 4] = [
        RouteBucket::Preferred,
        RouteBucket::NoCoordination,
        RouteBucket::CoordinationRequired,
        RouteBucket::Other,
    ];

    /// First match wins: "Preferred", then "No Coord", then "CDR"
    pub fn classify(source: &str) -> Self {
        if source.contains("Preferred") {
            RouteBucket::Preferred
        } else if source.contains("No Coord") {
            RouteBucket::NoCoordination
        } else if source.contains("CDR") {
            RouteBucket::CoordinationRequired
        } else {
            RouteBucket::Other
        }
    }

    fn index(self) -> usize {
        match self {
            RouteBucket::Preferred => 0,
            RouteBucket::NoCoordination => 1,
            RouteBucket::CoordinationRequired => 2,
            RouteBucket::Other => 3,
        }
    }

    fn title_key(self) -> &'static str {
        match self {
            RouteBucket::Preferred => "bucket_preferred",
            RouteBucket::NoCoordination => "bucket_no_coord",
            RouteBucket::CoordinationRequired => "bucket_coord_req",
            RouteBucket::Other => "bucket_other",
        }
    }

    pub fn title(self, lang: &str) -> String {
        t(self.title_key(), lang)
    }
}

/// Routes partitioned into the four buckets, input order kept inside each
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteGroups {
    buckets: [Vec<Route>; 4],
}

impl RouteGroups {
    pub fn get(&self, bucket: RouteBucket) -> &[Route] {
        &self.buckets[bucket.index()]
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Non-empty buckets in display order
    pub fn non_empty(&self) -> impl Iterator<Item = (RouteBucket, &[Route])> + '_ {
        RouteBucket::ALL
            .into_iter()
            .map(move |bucket| (bucket, self.get(bucket)))
            .filter(|(_, routes)| !routes.is_empty())
    }
}

pub fn group_routes(routes: Vec<Route>) -> RouteGroups {
    let mut groups = RouteGroups::default();
    for route in routes {
        let bucket = RouteBucket::classify(route.source_label());
        groups.buckets[bucket.index()].push(route);
    }
    groups
}

/// One row of a results table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRow {
    pub route: String,
    pub route_type: String,
    pub notes: String,
}

impl From<&Route> for RouteRow {
    fn from(route: &Route) -> Self {
        Self {
            route: route.route_display().to_string(),
            route_type: route.source_display().to_string(),
            notes: route.notes().to_string(),
        }
    }
}

/// A titled table for one bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    pub bucket: RouteBucket,
    pub title: String,
    pub columns: [String; 3],
    pub rows: Vec<RouteRow>,
}

/// What the results area currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    Idle,
    Loading(String),
    Error(String),
    /// Lookup succeeded with zero routes
    Placeholder(String),
    Tables(Vec<RouteTable>),
}

/// Groups routes and prepares the tables (or the empty-result placeholder)
pub fn classify_and_render(routes: Vec<Route>, lang: &str) -> ResultsView {
    if routes.is_empty() {
        return ResultsView::Placeholder(t("no_routes_found", lang));
    }

    let columns = [
        t("column_route", lang),
        t("column_type", lang),
        t("column_notes", lang),
    ];
    let groups = group_routes(routes);
    let tables = groups
        .non_empty()
        .map(|(bucket, routes)| RouteTable {
            bucket,
            title: bucket.title(lang),
            columns: columns.clone(),
            rows: routes.iter().map(RouteRow::from).collect(),
        })
        .collect();

    ResultsView::Tables(tables)
}

/// Drives one search: validation, lookup, classification
#[derive(Clone)]
pub struct RouteFinderViewModel {
    lookup: Rc<dyn RouteLookup>,
    language: String,
}

impl RouteFinderViewModel {
    pub fn new(lookup: Rc<dyn RouteLookup>, language: &str) -> Self {
        Self {
            lookup,
            language: language.to_string(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Runs a search and publishes every step into `state`.
    ///
    /// Earlier in-flight searches are neither cancelled nor awaited; each
    /// response is rendered when it lands.
    pub async fn submit_search(&self, state: &SearchState, origin: &str, destination: &str) {
        let request = match validate_search(origin, destination) {
            Ok(request) => request,
            Err(err) => {
                log::warn!("⚠️ [SEARCH] Validation failed (origin={:?}, destination={:?})", origin, destination);
                state.set_view(ResultsView::Error(err.user_message(&self.language)));
                return;
            }
        };

        let seq = state.begin_search();
        log::info!("🔍 [SEARCH] #{} {} -> {} via {} lookup", seq, request.origin, request.destination, self.lookup.name());
        state.set_view(ResultsView::Loading(t("finding_routes", &self.language)));

        let view = match self.lookup.find_routes(&request).await {
            Ok(routes) => {
                log::info!("✅ [SEARCH] #{} {} routes", seq, routes.len());
                classify_and_render(routes, &self.language)
            }
            Err(err) => {
                log::error!("❌ [SEARCH] Error finding routes: {}", err);
                ResultsView::Error(SearchError::from(err).user_message(&self.language))
            }
        };

        if state.is_stale(seq) {
            log::warn!("⚠️ [SEARCH] #{} resolved after a newer search was submitted", seq);
        }
        state.set_view(view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use crate::services::MockRouteLookup;

    /// Records every request and answers with a fixed result
    struct FakeLookup {
        calls: RefCell<Vec<RouteRequest>>,
        result: Result<Vec<Route>, LookupError>,
    }

    impl FakeLookup {
        fn new(result: Result<Vec<Route>, LookupError>) -> Rc<Self> {
            Rc::new(Self {
                calls: RefCell::new(Vec::new()),
                result,
            })
        }
    }

    #[async_trait(?Send)]
    impl RouteLookup for FakeLookup {
        async fn find_routes(&self, request: &RouteRequest) -> Result<Vec<Route>, LookupError> {
            self.calls.borrow_mut().push(request.clone());
            self.result.clone()
        }

        fn name(&self) -> &'static str {
            "fake"
        }
    }

    fn run(lookup: Rc<FakeLookup>, origin: &str, destination: &str) -> ResultsView {
        let vm = RouteFinderViewModel::new(lookup, "EN");
        let state = SearchState::new();
        block_on(vm.submit_search(&state, origin, destination));
        state.view()
    }

    fn tables(view: ResultsView) -> Vec<RouteTable> {
        match view {
            ResultsView::Tables(tables) => tables,
            other => panic!("expected tables, got {:?}", other),
        }
    }

    #[test]
    fn blank_inputs_never_reach_the_lookup() {
        for (origin, destination) in [("", "MIA"), ("JFK", ""), ("   ", "MIA"), ("JFK", "\t "), ("", "")] {
            let lookup = FakeLookup::new(Ok(MockRouteLookup::sample_routes()));
            let view = run(lookup.clone(), origin, destination);
            assert!(lookup.calls.borrow().is_empty());
            assert_eq!(view, ResultsView::Error("Origin and Destination are required.".to_string()));
        }
    }

    #[test]
    fn inputs_are_trimmed_and_uppercased_before_lookup() {
        let lookup = FakeLookup::new(Ok(Vec::new()));
        run(lookup.clone(), "  jfk ", "mia\n");
        assert_eq!(
            *lookup.calls.borrow(),
            vec![RouteRequest {
                origin: "JFK".to_string(),
                destination: "MIA".to_string()
            }]
        );
    }

    #[test]
    fn jfk_to_mia_renders_three_tables_in_order() {
        let lookup = FakeLookup::new(Ok(MockRouteLookup::sample_routes()));
        let tables = tables(run(lookup, "JFK", "MIA"));

        let titles: Vec<&str> = tables.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Preferred Routes", "CDRs (No Coordination)", "CDRs (Coordination Required)"]
        );
        assert!(tables.iter().all(|t| t.rows.len() == 1));
        assert!(tables.iter().all(|t| t.bucket != RouteBucket::Other));

        assert_eq!(
            tables[0].rows[0],
            RouteRow {
                route: "JFK.COATE.TEB".to_string(),
                route_type: "Preferred Route".to_string(),
                notes: "TURBOJETS ONLY".to_string(),
            }
        );
        assert_eq!(tables[1].rows[0].notes, "");
        assert_eq!(tables[2].rows[0].notes, "AVOID ZNY");
        assert_eq!(tables[0].columns, ["Route".to_string(), "Type".to_string(), "Notes".to_string()]);
    }

    #[test]
    fn lookup_failure_surfaces_its_message() {
        let lookup = FakeLookup::new(Err(LookupError::Http {
            status: 400,
            message: Some("Unknown airport".to_string()),
        }));
        assert_eq!(run(lookup, "JFK", "XXX"), ResultsView::Error("Error: Unknown airport".to_string()));
    }

    #[test]
    fn lookup_failure_without_message_uses_generic_text() {
        let lookup = FakeLookup::new(Err(LookupError::Unknown));
        assert_eq!(
            run(lookup, "JFK", "MIA"),
            ResultsView::Error("Error: An unknown error occurred.".to_string())
        );
    }

    #[test]
    fn widget_stays_usable_after_a_failure() {
        let state = SearchState::new();
        let failing = RouteFinderViewModel::new(FakeLookup::new(Err(LookupError::Network("offline".into()))), "EN");
        block_on(failing.submit_search(&state, "JFK", "MIA"));
        assert_eq!(state.view(), ResultsView::Error("Error: offline".to_string()));

        let working = RouteFinderViewModel::new(FakeLookup::new(Ok(MockRouteLookup::sample_routes())), "EN");
        block_on(working.submit_search(&state, "JFK", "MIA"));
        assert_eq!(tables(state.view()).len(), 3);
    }

    #[test]
    fn loading_is_published_before_the_result() {
        let state = SearchState::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            let observed = state.clone();
            state.subscribe(move || seen.borrow_mut().push(observed.view()));
        }
        let vm = RouteFinderViewModel::new(FakeLookup::new(Ok(Vec::new())), "EN");
        block_on(vm.submit_search(&state, "JFK", "MIA"));

        assert_eq!(
            *seen.borrow(),
            vec![
                ResultsView::Loading("Finding routes...".to_string()),
                ResultsView::Placeholder("No routes found matching your criteria.".to_string()),
            ]
        );
    }

    #[test]
    fn classification_is_a_total_partition() {
        let routes = vec![
            Route::new("A", "Preferred Route"),
            Route::new("B", "CDR (No Coord)"),
            Route::new("C", "Playbook"),
            Route::new("D", "CDR (Coord Req)"),
            Route::new("E", "Preferred Route"),
            Route::default(),
        ];
        let groups = group_routes(routes.clone());
        assert_eq!(groups.total(), routes.len());

        let mut regrouped: Vec<Route> = RouteBucket::ALL
            .iter()
            .flat_map(|b| groups.get(*b).to_vec())
            .collect();
        let mut expected = routes;
        regrouped.sort_by(|a, b| a.route_string.cmp(&b.route_string));
        expected.sort_by(|a, b| a.route_string.cmp(&b.route_string));
        assert_eq!(regrouped, expected);

        let preferred: Vec<_> = groups.get(RouteBucket::Preferred).iter().map(|r| r.route_display()).collect();
        assert_eq!(preferred, vec!["A", "E"]);
        assert_eq!(groups.get(RouteBucket::Other).len(), 2);
    }

    #[test]
    fn preferred_wins_over_cdr() {
        assert_eq!(RouteBucket::classify("Preferred Route (CDR)"), RouteBucket::Preferred);
        assert_eq!(RouteBucket::classify("CDR (No Coord)"), RouteBucket::NoCoordination);
        assert_eq!(RouteBucket::classify("CDR (Coord Req)"), RouteBucket::CoordinationRequired);
        assert_eq!(RouteBucket::classify("preferred"), RouteBucket::Other);
        assert_eq!(RouteBucket::classify(""), RouteBucket::Other);
    }

    #[test]
    fn empty_result_is_a_single_placeholder() {
        assert_eq!(
            classify_and_render(Vec::new(), "EN"),
            ResultsView::Placeholder("No routes found matching your criteria.".to_string())
        );
    }

    #[test]
    fn only_other_routes_produce_only_other_table() {
        let tables = tables(classify_and_render(vec![Route::new("X.Y", "TEC")], "EN"));
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].title, "Other");
    }
}
