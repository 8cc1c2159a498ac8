use dioxus::prelude::*;

use crate::views::Chrome;
use crate::Route;

#[component]
pub fn NewDocument() -> Element {
    let nav = use_navigator();

    rsx! {
        Chrome {
            ui::DocumentEditor {
                on_saved: move |id: String| {
                    // The first save creates the document; move the URL onto it.
                    nav.replace(Route::Editor { id });
                },
            }
        }
    }
}

#[component]
pub fn Editor(id: String) -> Element {
    let document = use_resource(move || {
        let id = id.clone();
        async move { ui::make_documents().get_by_id(&id).await }
    });

    rsx! {
        Chrome {
            {match document() {
                Some(Some(doc)) => rsx! {
                    ui::DocumentEditor {
                        document: Some(doc),
                        on_saved: move |_| {},
                    }
                },
                Some(None) => rsx! {
                    div {
                        class: "empty-state",
                        h2 { "Document not found" }
                        p { "It may have been deleted, or the link is stale." }
                        Link { to: Route::Documents {}, "Back to documents" }
                    }
                },
                None => rsx! {
                    div { class: "empty-state", "Loading..." }
                },
            }}
        }
    }
}
