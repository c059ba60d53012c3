use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    api,
    client::{
        router::Route,
        store::{notify::use_notifier, UserState},
        util::capitalize,
    },
    http::ApiClient,
};

#[component]
pub fn Navbar() -> Element {
    let client = use_context::<ApiClient>();
    let mut user_state = use_context::<Signal<UserState>>();
    let notifier = use_notifier();
    let navigator = navigator();

    let logout = move |_: MouseEvent| {
        let client = client.clone();
        async move {
            match api::auth::logout(&client).await {
                Ok(_) => notifier.success("Sessão encerrada"),
                Err(e) => {
                    tracing::warn!("Logout request failed: {}", e);
                    notifier.warn("Sessão encerrada localmente")
                }
            };

            user_state.set(UserState::default());
            navigator.push(Route::Login {});
        }
    };

    let user = user_state.read().user.clone();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                Link { to: Route::Home {}, class: "btn btn-ghost text-xl", "Frete Admin" }
            }
            div {
                class: "navbar-end flex gap-4",
                if let Some(user) = user {
                    p { class: "text-sm",
                        "{user.username} ({capitalize(&user.role)})"
                    }
                }
                button {
                    class: "btn btn-outline",
                    onclick: logout,
                    "Sair"
                }
            }
        }

        Outlet::<Route> {}
    }
}
