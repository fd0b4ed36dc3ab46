//! Dialogs
//!
//! Native alert/confirm prompts.

/// Show a notice
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Ask for confirmation; false when the prompt cannot be shown
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
