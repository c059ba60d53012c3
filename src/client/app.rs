use dioxus::prelude::*;

use crate::{
    client::{
        components::{LoaderOverlay, ToastContainer},
        router::Route,
        store::{Loader, LoaderState, Notifier, ToastStack, UserState},
    },
    config::Config,
    http::ApiClient,
    session::SessionContext,
};

#[cfg(target_arch = "wasm32")]
fn build_client(config: Config, session: SessionContext) -> ApiClient {
    ApiClient::browser(config, session)
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(config: Config, session: SessionContext) -> ApiClient {
    use std::sync::Arc;

    use dioxus_logger::tracing;

    use crate::http::{HeadlessNavigator, ReqwestTransport};

    ApiClient::native(config.clone(), session.clone()).unwrap_or_else(|e| {
        tracing::error!("Failed to build HTTP client with cookie store: {}", e);

        ApiClient::new(
            config,
            session,
            Arc::new(ReqwestTransport::with_client(reqwest::Client::new())),
            Arc::new(HeadlessNavigator::new()),
        )
    })
}

#[component]
pub fn App() -> Element {
    // Sole place configuration is read
    let config = use_hook(Config::load_or_default);
    let toast_duration = config.toast_duration;

    let client = use_context_provider(|| build_client(config, SessionContext::new()));
    use_context_provider(|| client.session().clone());

    let toasts = use_signal(ToastStack::default);
    use_context_provider(|| Notifier::new(toasts, toast_duration));

    let loader = use_signal(LoaderState::default);
    use_context_provider(|| Loader::new(loader));

    let user_state = use_signal(UserState::default);
    use_context_provider(|| user_state);

    rsx! {
        Router::<Route> {}
        ToastContainer {}
        LoaderOverlay {}
    }
}
