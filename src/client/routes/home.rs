use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    api,
    client::{
        components::Page,
        router::Route,
        store::{notify::use_notifier, ProfileFetch, UserState},
        util::capitalize,
    },
    http::ApiClient,
};

#[component]
pub fn Home() -> Element {
    let client = use_context::<ApiClient>();
    let mut user_state = use_context::<Signal<UserState>>();
    let notifier = use_notifier();
    let navigator = navigator();

    use_effect(move || {
        if user_state.peek().fetched {
            return;
        }

        let client = client.clone();
        spawn(async move {
            let result = api::perfil::get(&client).await;
            let next = user_state.write().apply_profile(result);

            match next {
                ProfileFetch::Loaded => {}
                ProfileFetch::SignedOut => {
                    tracing::info!("Session expired, showing login");
                    navigator.push(Route::Login {});
                }
                ProfileFetch::Failed(message) => {
                    tracing::error!("Failed to fetch profile: {}", message);
                    notifier.error(message);
                }
            }
        });
    });

    rsx!(
        Page { title: "Início", class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex justify-center",
                ProfileCard { }
            }
        }
    )
}

#[component]
fn ProfileCard() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let state = user_state.read();

    rsx!(
        div {
            class: "card shadow-sm w-full max-w-96",
            div {
                class: "card-body",
                h2 { class: "card-title", "Perfil" }
                if let Some(user) = state.user.as_ref() {
                    p { class: "text-lg font-semibold", "{user.username}" }
                    div { class: "flex gap-2",
                        span { class: "badge badge-outline", "{capitalize(&user.role)}" }
                        if user.is_admin() {
                            span { class: "badge badge-primary", "Administrador" }
                        }
                    }
                } else if state.fetched {
                    p { "Não foi possível carregar o perfil." }
                } else {
                    div { class: "skeleton h-6 w-40" }
                    div { class: "skeleton h-4 w-24" }
                }
            }
        }
    )
}
