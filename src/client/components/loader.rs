use dioxus::prelude::*;

use crate::client::store::loader::use_loader;

/// Page-covering spinner. Nothing is rendered until the loader is first shown; after that it
/// stays in the page and is only hidden.
#[component]
pub fn LoaderOverlay() -> Element {
    let state = use_loader().state();

    if !state.is_materialized() {
        return rsx!();
    }

    let visibility = if state.is_visible() { "flex" } else { "hidden" };

    rsx!(
        div {
            class: "fixed inset-0 z-40 bg-base-100/60 items-center justify-center {visibility}",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}
