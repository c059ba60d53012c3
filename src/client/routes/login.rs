use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    api,
    client::{
        components::Page,
        router::Route,
        store::{loader::use_loader, notify::use_notifier, UserState},
    },
    http::{ApiClient, Outcome},
    model::user::LoginRequest,
};

#[component]
pub fn Login() -> Element {
    let client = use_context::<ApiClient>();
    let mut user_state = use_context::<Signal<UserState>>();
    let notifier = use_notifier();
    let loader = use_loader();
    let navigator = navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();

        async move {
            let request = match LoginRequest::new(&username(), &password()) {
                Ok(request) => request.remember(remember()),
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            error.set(None);
            loader.show();
            let result = api::auth::login(&client, &request).await;
            loader.hide();

            match result {
                Ok(Outcome::Success(response)) => {
                    user_state.set(UserState {
                        user: response.user,
                        fetched: true,
                    });
                    notifier.success("Login realizado com sucesso");
                    navigator.push(Route::Home {});
                }
                Ok(Outcome::AuthRedirect) => {
                    error.set(Some("Sessão expirada, tente novamente".to_string()));
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    error.set(Some(e.message().to_string()));
                }
            }
        }
    };

    rsx!(
        Page { title: "Login", class: "flex items-center justify-center",
            form {
                class: "card shadow-sm w-full max-w-96",
                onsubmit: submit,
                div { class: "card-body flex flex-col gap-2",
                    h2 { class: "card-title", "Entrar" }
                    input {
                        class: "input",
                        r#type: "text",
                        placeholder: "Usuário",
                        value: "{username}",
                        oninput: move |evt| username.set(evt.value()),
                    }
                    input {
                        class: "input",
                        r#type: "password",
                        placeholder: "Senha",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    label { class: "label",
                        input {
                            class: "checkbox",
                            r#type: "checkbox",
                            checked: remember(),
                            onchange: move |evt| remember.set(evt.checked()),
                        }
                        "Lembrar-me"
                    }
                    if let Some(message) = error() {
                        div { class: "alert alert-error", role: "alert", "{message}" }
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Entrar" }
                }
            }
        }
    )
}
