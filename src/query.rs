//! URL Filter Parameter
//!
//! Reads and writes the `filter` query parameter without reloading the page.

use wasm_bindgen::JsValue;

const FILTER_PARAM: &str = "filter";

/// Committed form of a raw input value: trimmed, `None` when nothing is
/// left (the parameter is then removed from the URL).
pub fn committed_value(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Filter value carried by the current URL, trimmed; empty when absent.
pub fn initial_filter() -> String {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    web_sys::UrlSearchParams::new_with_str(&search)
        .ok()
        .and_then(|params| params.get(FILTER_PARAM))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Rewrite the current URL with the committed filter via a non-reloading
/// history update.
pub fn sync_filter(filter: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(href) = window.location().href() else {
        return;
    };
    let Ok(url) = web_sys::Url::new(&href) else {
        return;
    };

    match committed_value(filter) {
        Some(value) => url.search_params().set(FILTER_PARAM, value),
        None => url.search_params().delete(FILTER_PARAM),
    }

    if let Ok(history) = window.history() {
        if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(&url.href())) {
            log::warn!("updating the page URL failed: {err:?}");
        }
    }
}
