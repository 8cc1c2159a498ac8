use dioxus::prelude::*;

use store::models::{count_characters, count_words};
use store::{AutoSaveSnapshot, Document, DocumentDraft, DocumentPatch, Settings};

use crate::notifications::{notify, use_notices, NoticeLevel};
use crate::snippets;
use crate::stores::{make_autosave, make_documents, make_settings};

const UI_CSS: Asset = asset!("/assets/ui.css");

/// The editing surface plus its chrome: title, snippet menu, counters, and
/// save/auto-save wiring.
///
/// The rich-text widget proper is an external collaborator; the shell only
/// needs get/set/insert semantics over the content string, which a source
/// textarea with a live HTML preview provides. All persistence goes through
/// the store services; `on_saved` fires with the document id after every
/// successful save so the host page can update its route.
#[component]
pub fn DocumentEditor(
    #[props(default)] document: Option<Document>,
    on_saved: EventHandler<String>,
) -> Element {
    let mut title = use_signal({
        let initial = document
            .as_ref()
            .map(|d| d.title.clone())
            .unwrap_or_default();
        move || initial
    });
    let mut content = use_signal({
        let initial = document
            .as_ref()
            .map(|d| d.content.clone())
            .unwrap_or_default();
        move || initial
    });
    let mut doc_id = use_signal({
        let initial = document.as_ref().map(|d| d.id.clone());
        move || initial
    });
    let mut dirty = use_signal(|| false);
    let mut prefs = use_signal(Settings::default);
    let mut restorable = use_signal(|| Option::<AutoSaveSnapshot>::None);
    let mut picked_snippet = use_signal(|| "alert".to_string());
    let notices = use_notices();

    let is_new = document.is_none();

    // Load settings on mount; for a fresh editor, offer to restore
    // auto-saved work from a previous session.
    let _loader = use_resource(move || async move {
        prefs.set(make_settings().load().await);
        if is_new {
            if let Some(snapshot) = make_autosave().last_snapshot().await {
                if !snapshot.content.trim().is_empty() {
                    restorable.set(Some(snapshot));
                }
            }
        }
    });

    let handle_save = move |_| {
        spawn(async move {
            let docs = make_documents();
            let result = match doc_id() {
                Some(id) => docs
                    .update(
                        &id,
                        DocumentPatch {
                            title: Some(title()),
                            content: Some(content()),
                            ..Default::default()
                        },
                    )
                    .await
                    .map(|_| id),
                None => {
                    docs.create(DocumentDraft {
                        title: title(),
                        content: content(),
                        ..Default::default()
                    })
                    .await
                }
            };
            match result {
                Ok(id) => {
                    doc_id.set(Some(id.clone()));
                    dirty.set(false);
                    notify(notices, NoticeLevel::Success, "Document saved");
                    on_saved.call(id);
                }
                Err(err) => notify(notices, NoticeLevel::Error, err.to_string()),
            }
        });
    };

    // Leaving the content area opportunistically snapshots unsaved work.
    let handle_blur = move |_| {
        if dirty() {
            let body = content();
            spawn(async move {
                make_autosave().autosave(&body).await;
            });
        }
    };

    // Snapshot on unmount (navigation away, page hide) if dirty. The task
    // must outlive this component, so it is not tied to the scope.
    use_drop(move || {
        if *dirty.peek() {
            let body = content.peek().clone();
            let _ = spawn_forever(async move {
                make_autosave().autosave(&body).await;
            });
        }
    });

    // Fixed-period auto-save, independent of user action.
    #[cfg(target_arch = "wasm32")]
    let _autosave_loop = use_future(move || async move {
        loop {
            let settings = prefs();
            if !settings.auto_save || settings.auto_save_interval == 0 {
                gloo_timers::future::TimeoutFuture::new(5_000).await;
                continue;
            }
            gloo_timers::future::TimeoutFuture::new(settings.auto_save_interval as u32).await;
            if dirty() {
                make_autosave().autosave(&content()).await;
            }
        }
    });

    let insert_snippet = move |_| {
        let fragment = snippets::render_named(&picked_snippet());
        if fragment.is_empty() {
            return;
        }
        content.with_mut(|c| c.push_str(&fragment));
        dirty.set(true);
    };

    let restore = move |_| {
        if let Some(snapshot) = restorable() {
            content.set(snapshot.content);
            dirty.set(true);
            restorable.set(None);
        }
    };

    let words = count_words(&content());
    let characters = count_characters(&content());
    let font_size = prefs().font_size;

    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        div {
            class: "editor",

            if let Some(snapshot) = restorable() {
                div {
                    class: "restore-banner",
                    span {
                        "Auto-saved draft from {snapshot.timestamp} ({snapshot.word_count} words) is available."
                    }
                    button { class: "btn btn-small", onclick: restore, "Restore" }
                    button {
                        class: "btn btn-small btn-ghost",
                        onclick: move |_| restorable.set(None),
                        "Dismiss"
                    }
                }
            }

            div {
                class: "editor-header",
                input {
                    class: "editor-title",
                    r#type: "text",
                    placeholder: "Untitled document",
                    value: title(),
                    oninput: move |evt: FormEvent| {
                        title.set(evt.value());
                        dirty.set(true);
                    },
                }
                div {
                    class: "editor-actions",
                    if dirty() {
                        span { class: "editor-unsaved", "Unsaved" }
                    }
                    button { class: "btn btn-primary", onclick: handle_save, "Save" }
                }
            }

            div {
                class: "editor-toolbar",
                select {
                    class: "snippet-select",
                    value: picked_snippet(),
                    onchange: move |evt: FormEvent| picked_snippet.set(evt.value()),
                    for name in snippets::NAMES {
                        option { value: *name, "{name}" }
                    }
                }
                button { class: "btn", onclick: insert_snippet, "Insert snippet" }
                span {
                    class: "editor-counts",
                    if prefs().show_word_count {
                        span { "{words} words" }
                    }
                    if prefs().show_character_count {
                        span { "{characters} characters" }
                    }
                }
            }

            div {
                class: "editor-panes",
                textarea {
                    class: "editor-source",
                    style: "font-size: {font_size}",
                    value: content(),
                    placeholder: "Start writing...",
                    oninput: move |evt: FormEvent| {
                        content.set(evt.value());
                        dirty.set(true);
                    },
                    onblur: handle_blur,
                }
                div {
                    class: "editor-preview",
                    style: "font-size: {font_size}",
                    dangerous_inner_html: content(),
                }
            }
        }
    }
}
