//! Application Context
//!
//! Shared client provided via Leptos Context API.

use crate::client::TodoClient;
use crate::commands::{BrowserDialogs, HttpTodoApi};
use crate::config::ClientConfig;

/// Client wired to the real backend and browser dialogs
pub type WebTodoClient = TodoClient<HttpTodoApi, BrowserDialogs>;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    pub client: WebTodoClient,
}

impl AppContext {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: TodoClient::new(HttpTodoApi::new(config.api_base.clone()), BrowserDialogs),
        }
    }
}
