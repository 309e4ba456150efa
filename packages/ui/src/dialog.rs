//! Blocking confirmation and notice dialogs.
//!
//! The flows here deliberately use the browser's modal dialogs: deletes must
//! not proceed without an answer, and submit confirmations block until
//! acknowledged. Native targets log instead (and confirm affirmatively) so
//! the crates stay testable off-web.

#[cfg(target_arch = "wasm32")]
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|window| window.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn confirm(message: &str) -> bool {
    tracing::info!("confirm: {message}");
    true
}

#[cfg(target_arch = "wasm32")]
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn alert(message: &str) {
    tracing::info!("alert: {message}");
}
