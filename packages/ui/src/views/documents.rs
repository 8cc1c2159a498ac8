use dioxus::prelude::*;

use store::models::strip_tags;
use store::{Document, DocumentPatch, StorageStats};

use crate::notifications::{notify, use_notices, NoticeLevel};
use crate::stores::make_documents;

const UI_CSS: Asset = asset!("/assets/ui.css");

/// Which slice of the collection the list shows when no search is active.
#[derive(Clone, Debug, Default, PartialEq)]
enum Shelf {
    #[default]
    All,
    Favorites,
    Category(String),
}

/// The document list: live search, favorites/category filters, per-document
/// actions, and an aggregate stats footer.
#[component]
pub fn DocumentsView(
    on_open: EventHandler<String>,
    on_view: EventHandler<String>,
    on_create: EventHandler<()>,
) -> Element {
    let mut documents = use_signal(Vec::<Document>::new);
    let mut categories = use_signal(Vec::<String>::new);
    let mut stats = use_signal(|| Option::<StorageStats>::None);
    let mut query = use_signal(String::new);
    let mut shelf = use_signal(Shelf::default);
    let notices = use_notices();

    // Search takes precedence over the shelf filter; both go through the
    // store API rather than filtering a cached list.
    let refresh = move || {
        spawn(async move {
            let docs = make_documents();
            let q = query.peek().trim().to_string();
            let listed = if !q.is_empty() {
                docs.search(&q).await
            } else {
                match shelf.peek().clone() {
                    Shelf::All => docs.get_all().await,
                    Shelf::Favorites => docs.favorites().await,
                    Shelf::Category(category) => docs.by_category(&category).await,
                }
            };
            documents.set(listed);

            let mut seen = Vec::new();
            for doc in docs.get_all().await {
                if !seen.contains(&doc.category) {
                    seen.push(doc.category);
                }
            }
            categories.set(seen);
            stats.set(Some(docs.stats().await));
        });
    };

    use_effect(move || refresh());

    let handle_toggle_favorite = move |id: String| {
        spawn(async move {
            let docs = make_documents();
            if let Some(doc) = docs.get_by_id(&id).await {
                let patch = DocumentPatch {
                    is_favorite: Some(!doc.is_favorite),
                    ..Default::default()
                };
                if let Err(err) = docs.update(&id, patch).await {
                    notify(notices, NoticeLevel::Error, err.to_string());
                }
            }
            refresh();
        });
    };

    let handle_delete = move |id: String| {
        spawn(async move {
            match make_documents().delete(&id).await {
                Ok(()) => notify(notices, NoticeLevel::Success, "Document deleted"),
                Err(err) => notify(notices, NoticeLevel::Error, err.to_string()),
            }
            refresh();
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        div {
            class: "documents-page",

            div {
                class: "documents-header",
                h1 { class: "page-title", "Documents" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_create.call(()),
                    "New document"
                }
            }

            div {
                class: "documents-filters",
                input {
                    class: "search-input",
                    r#type: "search",
                    placeholder: "Search title, content, category, tags...",
                    value: query(),
                    oninput: move |evt: FormEvent| {
                        query.set(evt.value());
                        refresh();
                    },
                }
                button {
                    class: if shelf() == Shelf::All { "chip chip-active" } else { "chip" },
                    onclick: move |_| {
                        shelf.set(Shelf::All);
                        refresh();
                    },
                    "All"
                }
                button {
                    class: if shelf() == Shelf::Favorites { "chip chip-active" } else { "chip" },
                    onclick: move |_| {
                        shelf.set(Shelf::Favorites);
                        refresh();
                    },
                    "Favorites"
                }
                for category in categories() {
                    CategoryChip {
                        key: "{category}",
                        category: category.clone(),
                        active: shelf() == Shelf::Category(category.clone()),
                        on_select: move |category: String| {
                            shelf.set(Shelf::Category(category));
                            refresh();
                        },
                    }
                }
            }

            if documents().is_empty() {
                div {
                    class: "empty-state",
                    h2 { "Nothing here" }
                    p { "Create a document or adjust the search." }
                }
            } else {
                div {
                    class: "documents-grid",
                    for document in documents() {
                        DocumentCard {
                            key: "{document.id}",
                            document: document.clone(),
                            on_open: move |id| on_open.call(id),
                            on_view: move |id| on_view.call(id),
                            on_toggle_favorite: handle_toggle_favorite,
                            on_delete: handle_delete,
                        }
                    }
                }
            }

            if let Some(stats) = stats() {
                div {
                    class: "stats-bar",
                    span { "{stats.documents} documents" }
                    span { "{stats.total_words} words" }
                    span { "{stats.total_characters} characters" }
                    span { "{stats.avg_words_per_document} words/document" }
                    span { "{stats.total_bytes} bytes stored" }
                }
            }
        }
    }
}

#[component]
fn CategoryChip(category: String, active: bool, on_select: EventHandler<String>) -> Element {
    let label = category.clone();
    rsx! {
        button {
            class: if active { "chip chip-active" } else { "chip" },
            onclick: move |_| on_select.call(category.clone()),
            "{label}"
        }
    }
}

#[component]
fn DocumentCard(
    document: Document,
    on_open: EventHandler<String>,
    on_view: EventHandler<String>,
    on_toggle_favorite: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let open_id = document.id.clone();
    let view_id = document.id.clone();
    let favorite_id = document.id.clone();
    let delete_id = document.id.clone();

    let preview: String = strip_tags(&document.content)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(120)
        .collect();
    let updated = document.updated_at.format("%Y-%m-%d %H:%M").to_string();

    rsx! {
        div {
            class: "doc-card",
            div {
                class: "doc-card-head",
                h3 {
                    class: "doc-card-title",
                    onclick: move |_| on_open.call(open_id.clone()),
                    "{document.title}"
                }
                button {
                    class: if document.is_favorite { "star star-on" } else { "star" },
                    title: "Toggle favorite",
                    onclick: move |_| on_toggle_favorite.call(favorite_id.clone()),
                    "★"
                }
            }
            p { class: "doc-card-preview", "{preview}" }
            div {
                class: "doc-card-meta",
                span { "{updated}" }
                span { "{document.word_count} words" }
                span { "{document.category}" }
                span { "v{document.version}" }
            }
            if !document.tags.is_empty() {
                div {
                    class: "doc-card-tags",
                    for tag in document.tags.iter() {
                        span { class: "tag", "{tag}" }
                    }
                }
            }
            div {
                class: "doc-card-actions",
                button {
                    class: "btn btn-small",
                    onclick: move |_| on_view.call(view_id.clone()),
                    "Public view"
                }
                button {
                    class: "btn btn-small btn-danger",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "Delete"
                }
            }
        }
    }
}
