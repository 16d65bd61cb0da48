pub mod api_utils;
pub mod charts;
pub mod format;

/// Show a blocking browser alert. No-op outside a window context.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
