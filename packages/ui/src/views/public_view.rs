use dioxus::prelude::*;

use crate::notifications::{notify, use_notices, NoticeLevel};
use crate::stores::make_documents;
use crate::views::ModalOverlay;

const UI_CSS: Asset = asset!("/assets/ui.css");

/// Read-only view of a stored document with print and share affordances.
/// This is the page a share link lands on; editing chrome stays out of it.
#[component]
pub fn PublicDocumentView(id: String, on_back: EventHandler<()>) -> Element {
    let mut share_open = use_signal(|| false);
    let document = use_resource(move || {
        let id = id.clone();
        async move { make_documents().get_by_id(&id).await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        div {
            class: "public-page",
            {match document() {
                Some(Some(doc)) => {
                    let updated = doc.updated_at.format("%Y-%m-%d").to_string();
                    rsx! {
                        div {
                            class: "public-toolbar no-print",
                            button {
                                class: "btn",
                                onclick: move |_| on_back.call(()),
                                "Back to editor"
                            }
                            div {
                                class: "public-toolbar-actions",
                                button { class: "btn", onclick: move |_| print_page(), "Print" }
                                button {
                                    class: "btn btn-primary",
                                    onclick: move |_| share_open.set(true),
                                    "Share"
                                }
                            }
                        }
                        article {
                            class: "public-document",
                            h1 { "{doc.title}" }
                            div {
                                class: "public-meta",
                                span { "{updated}" }
                                span { "{doc.word_count} words" }
                                span { "{doc.category}" }
                            }
                            div {
                                class: "public-content",
                                dangerous_inner_html: doc.content.clone(),
                            }
                        }
                        if share_open() {
                            ShareModal { on_close: move |_| share_open.set(false) }
                        }
                    }
                }
                Some(None) => rsx! {
                    div {
                        class: "empty-state",
                        h2 { "Document not found" }
                        p { "The link may be stale, or the document was deleted." }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| on_back.call(()),
                            "Back to editor"
                        }
                    }
                },
                None => rsx! {
                    div { class: "empty-state", "Loading..." }
                },
            }}
        }
    }
}

#[component]
fn ShareModal(on_close: EventHandler<()>) -> Element {
    let url = current_url();
    let link = url.clone();
    let notices = use_notices();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "share-modal",
                h3 { "Share this document" }
                p {
                    class: "settings-hint",
                    "Documents live in this browser's storage; the link works wherever that storage is available."
                }
                input {
                    class: "share-link",
                    r#type: "text",
                    readonly: true,
                    value: link,
                }
                div {
                    class: "share-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            copy_to_clipboard(&url);
                            notify(notices, NoticeLevel::Success, "Link copied");
                        },
                        "Copy link"
                    }
                    button { class: "btn", onclick: move |_| on_close.call(()), "Close" }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn print_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.print();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn print_page() {}

#[cfg(target_arch = "wasm32")]
fn current_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().href().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_url() -> String {
    String::new()
}

#[cfg(target_arch = "wasm32")]
fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn copy_to_clipboard(_text: &str) {}
