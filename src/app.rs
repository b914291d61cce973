// ============================================================================
// APP - Wires configuration, collaborator and widget together
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use crate::config::{AppConfig, LookupMode};
use crate::services::{ApiClient, MockRouteLookup, RouteLookup};
use crate::viewmodels::RouteFinderViewModel;
use crate::views::{render_current_year, RouteFinderWidget, WidgetIds};

pub struct App {
    widget: RouteFinderWidget,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, JsValue> {
        let lookup = build_lookup(config);
        log::info!("🔌 [APP] Route lookup: {}", lookup.name());

        let view_model = RouteFinderViewModel::new(lookup, &config.language);
        let widget = RouteFinderWidget::mount(&WidgetIds::default(), view_model)?;

        Ok(Self { widget })
    }

    pub fn render(&self) -> Result<(), JsValue> {
        render_current_year();
        self.widget.render()
    }

    pub fn widget(&self) -> &RouteFinderWidget {
        &self.widget
    }
}

/// Picks the collaborator once at startup
pub fn build_lookup(config: &AppConfig) -> Rc<dyn RouteLookup> {
    match config.lookup_mode {
        LookupMode::Mock => Rc::new(MockRouteLookup::new(config.mock_delay_ms)),
        LookupMode::Http => Rc::new(ApiClient::new(&config.api_base_url)),
    }
}
