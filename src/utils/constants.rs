/// Page elements the widget binds to
pub const FIND_ROUTES_BUTTON_ID: &str = "find-routes-btn";
pub const ORIGIN_INPUT_ID: &str = "origin";
pub const DESTINATION_INPUT_ID: &str = "destination";
pub const RESULTS_AREA_ID: &str = "routes-results-area";
pub const CURRENT_YEAR_ID: &str = "current-year";

/// CSS classes of the inline messages
pub const ERROR_MESSAGE_CLASS: &str = "error-message";
pub const LOADING_MESSAGE_CLASS: &str = "loading-message";
pub const PLACEHOLDER_CLASS: &str = "placeholder";
