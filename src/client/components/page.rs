use dioxus::document::Title;
use dioxus::prelude::*;

/// Page body below the fixed navbar, titled `<title> | Frete Admin`.
#[component]
pub fn Page(title: &'static str, class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        Title { "{title} | Frete Admin" }
        div {
            class: "min-h-screen pt-[64px] p-4 {class}",
            {children}
        }
    )
}
