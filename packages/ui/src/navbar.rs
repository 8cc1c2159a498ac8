use dioxus::prelude::*;

const UI_CSS: Asset = asset!("/assets/ui.css");

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        header {
            class: "navbar",
            span { class: "navbar-brand", "inkpad" }
            nav { class: "navbar-links", {children} }
        }
    }
}
