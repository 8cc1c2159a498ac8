use dioxus::prelude::*;

use views::{Documents, Editor, NewDocument, PublicView, Settings};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Documents {},
    #[route("/new")]
    NewDocument {},
    #[route("/edit/:id")]
    Editor { id: String },
    #[route("/view/:id")]
    PublicView { id: String },
    #[route("/settings")]
    Settings {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "web")]
    dioxus::launch(App);

    #[cfg(not(feature = "web"))]
    println!("inkpad runs in the browser; build with the `web` feature (dx serve --platform web).");
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(Vec::<ui::Notice>::new()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }

        ui::NoticeTray {}
        Router::<Route> {}
    }
}
