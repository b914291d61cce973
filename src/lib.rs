// ============================================================================
// ROUTE FINDER - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: functions that build DOM (no logic)
// - ViewModels: validation, classification, table preparation
// - Services: route lookup collaborators (mock / HTTP)
// - State: Rc<RefCell> state with change subscribers
// - Models: wire structures shared with the backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
pub mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;

// Keeps the mounted app alive for the lifetime of the page
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Route Finder - Rust Puro + MVVM");

    let app = App::new(&CONFIG).map_err(|e| {
        log::error!("❌ [MAIN] Could not mount route finder: {:?}", e);
        e
    })?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Repaints the results area (callable from JavaScript)
#[wasm_bindgen]
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref app) = *app_cell.borrow() {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] {:?}", e);
            }
        } else {
            log::warn!("⚠️ [RERENDER] App is not initialized");
        }
    });
}
