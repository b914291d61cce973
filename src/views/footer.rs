use crate::dom::{get_element_by_id, set_text_content};
use crate::utils::constants::CURRENT_YEAR_ID;

/// Fills `#current-year` when the page has one
pub fn render_current_year() {
    if let Some(span) = get_element_by_id(CURRENT_YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        set_text_content(&span, &year.to_string());
    }
}
