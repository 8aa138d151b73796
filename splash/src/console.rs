//! Browser console logging with the loctree `[loctree][scope]` prefix.
//!
//! On non-wasm targets (native unit tests) these are no-ops, since the
//! `web_sys::console` bindings only exist inside a browser.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

const INFO_STYLE: &str = "color: #00ccff;";
const WARN_STYLE: &str = "color: #ffcc00; font-weight: bold;";

pub fn info(scope: &str, message: &str) {
    emit(scope, message, INFO_STYLE, false);
}

pub fn warn(scope: &str, message: &str) {
    emit(scope, message, WARN_STYLE, true);
}

fn line(scope: &str, message: &str) -> String {
    format!("%c[loctree][{scope}] {message}")
}

#[cfg(target_arch = "wasm32")]
fn emit(scope: &str, message: &str, style: &str, is_warning: bool) {
    let text = JsValue::from_str(&line(scope, message));
    let style = JsValue::from_str(style);
    if is_warning {
        web_sys::console::warn_2(&text, &style);
    } else {
        web_sys::console::log_2(&text, &style);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(scope: &str, message: &str, style: &str, is_warning: bool) {
    let _ = (line(scope, message), style, is_warning);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_carries_scope_prefix_and_style_marker() {
        assert_eq!(line("stars", "HTTP 404"), "%c[loctree][stars] HTTP 404");
    }

    #[test]
    fn logging_off_browser_is_silent() {
        info("theme", "dark");
        warn("stars", "offline");
    }
}
