use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { title: "Página não encontrada", class: "flex flex-col items-center justify-center gap-4",
            p { class: "text-2xl", "404" }
            p { "Nenhuma página em /{path}" }
            Link { to: Route::Home {}, class: "btn btn-primary", "Voltar" }
        }
    )
}
