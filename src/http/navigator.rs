use parking_lot::Mutex;

use dioxus_logger::tracing;

/// Sends the user somewhere else, used when the server asks for a login.
pub trait Navigator {
    fn redirect(&self, location: &str);
}

/// Navigates the browser window with a full page load.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

#[cfg(target_arch = "wasm32")]
impl Navigator for BrowserNavigator {
    fn redirect(&self, location: &str) {
        let Some(window) = web_sys::window() else {
            tracing::error!(location = %location, "No browser window available for redirect");
            return;
        };

        if let Err(e) = window.location().set_href(location) {
            tracing::error!(location = %location, "Failed to redirect: {:?}", e);
        }
    }
}

/// Navigator for hosts without a browser window; remembers the last requested location.
#[derive(Debug, Default)]
pub struct HeadlessNavigator {
    last: Mutex<Option<String>>,
}

impl HeadlessNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_redirect(&self) -> Option<String> {
        self.last.lock().clone()
    }
}

impl Navigator for HeadlessNavigator {
    fn redirect(&self, location: &str) {
        tracing::info!(location = %location, "Redirect requested");

        *self.last.lock() = Some(location.to_string());
    }
}
