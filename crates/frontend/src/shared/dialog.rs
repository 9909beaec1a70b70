//! Native browser dialogs. The export/print affordances of the prototype
//! end here: an acknowledgement popup and nothing else.

use web_sys::window;

/// Blocking confirmation dialog; `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Fire-and-forget acknowledgement dialog.
pub fn notify(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}
