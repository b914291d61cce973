// ============================================================================
// ROUTE FINDER WIDGET - Binds the search form already present in the page
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};
use crate::dom::{on_click, require_element, require_input};
use crate::state::SearchState;
use crate::utils::constants::{
    DESTINATION_INPUT_ID, FIND_ROUTES_BUTTON_ID, ORIGIN_INPUT_ID, RESULTS_AREA_ID,
};
use crate::viewmodels::RouteFinderViewModel;
use crate::views::route_results::render_results;

/// Ids of the page elements the widget is bound to
#[derive(Debug, Clone)]
pub struct WidgetIds {
    pub button: String,
    pub origin: String,
    pub destination: String,
    pub results: String,
}

impl Default for WidgetIds {
    fn default() -> Self {
        Self {
            button: FIND_ROUTES_BUTTON_ID.to_string(),
            origin: ORIGIN_INPUT_ID.to_string(),
            destination: DESTINATION_INPUT_ID.to_string(),
            results: RESULTS_AREA_ID.to_string(),
        }
    }
}

/// Origin/destination form + results area
pub struct RouteFinderWidget {
    state: SearchState,
    results_area: Element,
}

impl RouteFinderWidget {
    /// Looks up the page elements, wires the button and the re-render
    pub fn mount(ids: &WidgetIds, view_model: RouteFinderViewModel) -> Result<Self, JsValue> {
        let button = require_element(&ids.button)?;
        let origin_input = require_input(&ids.origin)?;
        let destination_input = require_input(&ids.destination)?;
        let results_area = require_element(&ids.results)?;

        let state = SearchState::new();

        // Every state change replaces the results area
        {
            let area = results_area.clone();
            let observed = state.clone();
            state.subscribe(move || {
                if let Err(e) = render_results(&area, &observed.view()) {
                    log::error!("❌ [RENDER] Error rendering results: {:?}", e);
                }
            });
        }

        {
            let state = state.clone();
            on_click(&button, move |e: web_sys::MouseEvent| {
                e.prevent_default();
                Self::submit(&view_model, &state, &origin_input, &destination_input);
            })?;
        }

        log::info!("✅ [WIDGET] Route finder mounted on #{}", ids.button);
        Ok(Self {
            state,
            results_area,
        })
    }

    fn submit(
        view_model: &RouteFinderViewModel,
        state: &SearchState,
        origin_input: &HtmlInputElement,
        destination_input: &HtmlInputElement,
    ) {
        let origin = origin_input.value();
        let destination = destination_input.value();
        let view_model = view_model.clone();
        let state = state.clone();

        spawn_local(async move {
            view_model.submit_search(&state, &origin, &destination).await;
        });
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Forces a repaint of the current state
    pub fn render(&self) -> Result<(), JsValue> {
        render_results(&self.results_area, &self.state.view())
    }
}
