// ============================================================================
// ROUTE RESULTS VIEW - ResultsView -> DOM (no logic)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, clear_children, ElementBuilder};
use crate::utils::constants::{ERROR_MESSAGE_CLASS, LOADING_MESSAGE_CLASS, PLACEHOLDER_CLASS};
use crate::viewmodels::{ResultsView, RouteTable};

/// Replaces the content of `area` with `view`
pub fn render_results(area: &Element, view: &ResultsView) -> Result<(), JsValue> {
    clear_children(area);

    match view {
        ResultsView::Idle => {}
        ResultsView::Loading(message) => {
            append_child(area, &render_message(LOADING_MESSAGE_CLASS, message)?)?;
        }
        ResultsView::Error(message) => {
            append_child(area, &render_message(ERROR_MESSAGE_CLASS, message)?)?;
        }
        ResultsView::Placeholder(message) => {
            append_child(area, &render_message(PLACEHOLDER_CLASS, message)?)?;
        }
        ResultsView::Tables(tables) => {
            for table in tables {
                let (title, element) = render_route_table(table)?;
                append_child(area, &title)?;
                append_child(area, &element)?;
            }
        }
    }
    Ok(())
}

fn render_message(class: &str, message: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("p")?.class(class).text(message).build())
}

/// `<h3>title</h3>` + `<table>` with Route / Type / Notes columns
fn render_route_table(table: &RouteTable) -> Result<(Element, Element), JsValue> {
    let title = ElementBuilder::new("h3")?.text(&table.title).build();

    let mut header_row = ElementBuilder::new("tr")?;
    for column in &table.columns {
        header_row = header_row.child(ElementBuilder::new("th")?.text(column).build())?;
    }
    let thead = ElementBuilder::new("thead")?.child(header_row.build())?.build();

    let tbody = ElementBuilder::new("tbody")?.build();
    for row in &table.rows {
        let tr = ElementBuilder::new("tr")?
            .child(ElementBuilder::new("td")?.text(&row.route).build())?
            .child(ElementBuilder::new("td")?.text(&row.route_type).build())?
            .child(ElementBuilder::new("td")?.text(&row.notes).build())?
            .build();
        append_child(&tbody, &tr)?;
    }

    let element = ElementBuilder::new("table")?
        .child(thead)?
        .child(tbody)?
        .build();

    Ok((title, element))
}
