use dioxus::prelude::*;

/// Visibility of the page-covering loader overlay.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoaderState {
    materialized: bool,
    visible: bool,
}

impl LoaderState {
    /// Show the overlay. Showing it again has no further effect.
    pub fn show(&mut self) {
        self.materialized = true;
        self.visible = true;
    }

    /// Hide the overlay; a no-op when it is not shown.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the overlay has ever been shown and so exists in the page.
    pub fn is_materialized(&self) -> bool {
        self.materialized
    }
}

/// Context handle toggling the single loader overlay.
#[derive(Clone, Copy, PartialEq)]
pub struct Loader {
    state: Signal<LoaderState>,
}

impl Loader {
    pub fn new(state: Signal<LoaderState>) -> Self {
        Self { state }
    }

    pub fn show(&self) {
        let mut state = self.state;
        if !state.peek().is_visible() {
            state.write().show();
        }
    }

    pub fn hide(&self) {
        let mut state = self.state;
        if state.peek().is_visible() {
            state.write().hide();
        }
    }

    pub fn state(&self) -> LoaderState {
        *self.state.read()
    }
}

/// Loader provided by [`crate::client::App`].
pub fn use_loader() -> Loader {
    use_context::<Loader>()
}
