use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn PublicView(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::PublicDocumentView {
            id,
            on_back: move |_| {
                nav.push(Route::Documents {});
            },
        }
    }
}
