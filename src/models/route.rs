use serde::{Deserialize, Serialize};

/// Placeholder shown for a missing route string or source label
pub const NOT_AVAILABLE: &str = "N/A";

/// Candidate route returned by the lookup service.
///
/// Wire names are PascalCase (`RouteString`, `Source`, ...). Every field is
/// optional on the wire; absent and empty values render the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Route {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

impl Route {
    pub fn new(route_string: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            route_string: Some(route_string.into()),
            source: Some(source.into()),
            ..Self::default()
        }
    }

    pub fn with_restrictions(mut self, restrictions: impl Into<String>) -> Self {
        self.restrictions = Some(restrictions.into());
        self
    }

    pub fn with_justification(mut self, justification: impl Into<String>) -> Self {
        self.justification = Some(justification.into());
        self
    }

    /// Source label used for classification ("" when absent)
    pub fn source_label(&self) -> &str {
        self.source.as_deref().unwrap_or("")
    }

    /// Text for the "Route" column
    pub fn route_display(&self) -> &str {
        non_empty(self.route_string.as_deref()).unwrap_or(NOT_AVAILABLE)
    }

    /// Text for the "Type" column
    pub fn source_display(&self) -> &str {
        non_empty(self.source.as_deref()).unwrap_or(NOT_AVAILABLE)
    }

    /// Text for the "Notes" column: restrictions, then justification, then ""
    pub fn notes(&self) -> &str {
        non_empty(self.restrictions.as_deref())
            .or_else(|| non_empty(self.justification.as_deref()))
            .unwrap_or("")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Body of `POST /routes/find`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
}

/// Error body returned by the backend on a non-2xx status
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_pascal_case_payload() {
        let json = r#"[
            {"RouteString": "JFK.COATE.TEB", "Source": "Preferred Route", "Restrictions": "TURBOJETS ONLY"},
            {"RouteString": "JFK.DPK.SWL.BOS", "Source": "CDR (No Coord)"}
        ]"#;
        let routes: Vec<Route> = serde_json::from_str(json).unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].route_string.as_deref(), Some("JFK.COATE.TEB"));
        assert_eq!(routes[0].restrictions.as_deref(), Some("TURBOJETS ONLY"));
        assert_eq!(routes[1].justification, None);
    }

    #[test]
    fn notes_prefer_restrictions_over_justification() {
        let both = Route::new("A.B", "CDR")
            .with_restrictions("JETS ONLY")
            .with_justification("AVOID ZNY");
        assert_eq!(both.notes(), "JETS ONLY");

        let justification_only = Route::new("A.B", "CDR").with_justification("AVOID ZNY");
        assert_eq!(justification_only.notes(), "AVOID ZNY");

        let neither = Route::new("A.B", "CDR");
        assert_eq!(neither.notes(), "");
    }

    #[test]
    fn empty_restrictions_fall_through_to_justification() {
        let route = Route::new("A.B", "CDR")
            .with_restrictions("")
            .with_justification("WEATHER");
        assert_eq!(route.notes(), "WEATHER");
    }

    #[test]
    fn missing_fields_render_as_not_available() {
        let route: Route = serde_json::from_str("{}").unwrap();
        assert_eq!(route.route_display(), NOT_AVAILABLE);
        assert_eq!(route.source_display(), NOT_AVAILABLE);
        assert_eq!(route.source_label(), "");
    }

    #[test]
    fn request_serializes_with_lowercase_keys() {
        let request = RouteRequest {
            origin: "JFK".to_string(),
            destination: "MIA".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"origin": "JFK", "destination": "MIA"}));
    }
}
