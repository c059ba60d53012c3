use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCircleCheck, FaCircleInfo, FaCircleXmark, FaTriangleExclamation, FaXmark,
};
use dioxus_free_icons::Icon;

use crate::client::store::{notify::use_notifier, Toast, ToastLevel};

/// Stacked toasts, rendered only while at least one is showing.
#[component]
pub fn ToastContainer() -> Element {
    let notifier = use_notifier();
    let stack = notifier.stack();

    if stack.read().is_empty() {
        return rsx!();
    }

    let toasts: Vec<Toast> = stack.read().toasts().to_vec();

    rsx!(
        div { class: "toast toast-end z-50",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast }
            }
        }
    )
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let notifier = use_notifier();
    let id = toast.id;

    rsx!(
        div {
            class: "alert {toast.level.class()} flex gap-2",
            role: "alert",
            ToastIcon { level: toast.level }
            span { "{toast.message}" }
            button {
                class: "btn btn-ghost btn-xs",
                onclick: move |_| notifier.dismiss(id),
                Icon { width: 12, height: 12, icon: FaXmark }
            }
        }
    )
}

#[component]
fn ToastIcon(level: ToastLevel) -> Element {
    match level {
        ToastLevel::Success => rsx!(Icon { width: 18, height: 18, icon: FaCircleCheck }),
        ToastLevel::Error => rsx!(Icon { width: 18, height: 18, icon: FaCircleXmark }),
        ToastLevel::Info => rsx!(Icon { width: 18, height: 18, icon: FaCircleInfo }),
        ToastLevel::Warn => rsx!(Icon { width: 18, height: 18, icon: FaTriangleExclamation }),
    }
}
