//! Blocking notifications via `window.alert`.

pub fn alert(message: &str) {
    let shown = web_sys::window().map(|w| w.alert_with_message(message));
    if !matches!(shown, Some(Ok(()))) {
        log::warn!("[DIALOG] Could not show alert: {}", message);
    }
}
