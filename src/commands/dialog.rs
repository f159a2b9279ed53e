//! Blocking Dialogs
//!
//! `window.alert` / `confirm` / `prompt`, behind a trait so the client logic
//! can run without a browser.

pub trait Dialogs {
    fn alert(&self, message: &str);

    /// `false` when declined
    fn confirm(&self, message: &str) -> bool;

    /// `None` when cancelled
    fn prompt(&self, message: &str, default: &str) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("[APP] alert failed: {:?}", e);
            }
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        web_sys::window()
            .and_then(|window| window.prompt_with_message_and_default(message, default).ok())
            .flatten()
    }
}
