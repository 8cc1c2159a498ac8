use dioxus::prelude::*;

use store::{AutoSaveSnapshot, ExportFormat, SettingsPatch};

use crate::download::trigger_download;
use crate::notifications::{notify, use_notices, NoticeLevel};
use crate::stores::{clear_all, make_autosave, make_documents, make_settings};

const UI_CSS: Asset = asset!("/assets/ui.css");

/// Settings form plus the data-management surface: auto-save backups,
/// export/import, and the clear-everything switch.
#[component]
pub fn SettingsView(on_restored: EventHandler<()>) -> Element {
    let mut auto_save = use_signal(|| true);
    let mut interval_secs = use_signal(|| 30u64);
    let mut theme = use_signal(|| "default".to_string());
    let mut font_size = use_signal(|| "14px".to_string());
    let mut language = use_signal(|| "en".to_string());
    let mut show_words = use_signal(|| true);
    let mut show_chars = use_signal(|| true);
    let mut save_status = use_signal(|| Option::<&'static str>::None);
    let mut backups = use_signal(Vec::<AutoSaveSnapshot>::new);
    let mut confirm_clear = use_signal(|| false);
    let notices = use_notices();

    // Load the persisted settings and the backup list on mount.
    let _loader = use_resource(move || async move {
        let settings = make_settings().load().await;
        auto_save.set(settings.auto_save);
        interval_secs.set(settings.auto_save_interval / 1000);
        theme.set(settings.theme);
        font_size.set(settings.font_size);
        language.set(settings.language);
        show_words.set(settings.show_word_count);
        show_chars.set(settings.show_character_count);
        backups.set(make_autosave().backups().await);
    });

    let handle_save = move |_| {
        spawn(async move {
            let patch = SettingsPatch {
                auto_save: Some(auto_save()),
                auto_save_interval: Some(interval_secs() * 1000),
                theme: Some(theme()),
                font_size: Some(font_size()),
                language: Some(language()),
                show_word_count: Some(show_words()),
                show_character_count: Some(show_chars()),
            };
            match make_settings().save(patch).await {
                Ok(_) => save_status.set(Some("success")),
                Err(err) => {
                    save_status.set(Some("error"));
                    notify(notices, NoticeLevel::Error, err.to_string());
                }
            }
        });
    };

    let handle_export_json = move |_| {
        spawn(async move {
            let file = make_documents().export(ExportFormat::Json).await;
            trigger_download(file.filename, file.mime, &file.body);
        });
    };

    let handle_export_csv = move |_| {
        spawn(async move {
            let file = make_documents().export(ExportFormat::Csv).await;
            trigger_download(file.filename, file.mime, &file.body);
        });
    };

    let handle_import = move |evt: FormEvent| {
        spawn(async move {
            let Some(engine) = evt.files() else {
                return;
            };
            for name in engine.files() {
                let Some(payload) = engine.read_file_to_string(&name).await else {
                    notify(notices, NoticeLevel::Error, format!("Could not read {name}"));
                    continue;
                };
                match make_documents().import(&payload).await {
                    Ok(count) => notify(
                        notices,
                        NoticeLevel::Success,
                        format!("Imported {count} documents"),
                    ),
                    Err(err) => notify(notices, NoticeLevel::Error, err.to_string()),
                }
            }
        });
    };

    let handle_restore = move |snapshot: AutoSaveSnapshot| {
        spawn(async move {
            // Promote the chosen backup to the current snapshot; the editor
            // then offers it for restoration.
            make_autosave().autosave(&snapshot.content).await;
            on_restored.call(());
        });
    };

    let handle_clear = move |_| {
        if !confirm_clear() {
            confirm_clear.set(true);
            return;
        }
        spawn(async move {
            match clear_all().await {
                Ok(()) => {
                    backups.set(Vec::new());
                    notify(notices, NoticeLevel::Success, "All data cleared");
                }
                Err(err) => notify(notices, NoticeLevel::Error, err.to_string()),
            }
            confirm_clear.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        div {
            class: "settings-page",

            h1 { class: "page-title", "Settings" }

            div {
                class: "settings-section",
                h2 { class: "section-title", "Editor" }

                label {
                    class: "settings-row",
                    input {
                        r#type: "checkbox",
                        checked: auto_save(),
                        onchange: move |evt: FormEvent| {
                            auto_save.set(evt.checked());
                            save_status.set(None);
                        },
                    }
                    "Auto-save while editing"
                }

                div {
                    class: "settings-row",
                    label { r#for: "interval", "Auto-save interval (seconds)" }
                    input {
                        id: "interval",
                        r#type: "number",
                        min: "0",
                        max: "3600",
                        value: "{interval_secs()}",
                        oninput: move |evt: FormEvent| {
                            if let Ok(v) = evt.value().parse::<u64>() {
                                interval_secs.set(v);
                                save_status.set(None);
                            }
                        },
                    }
                    p { class: "settings-hint", "Set to 0 to disable the timer." }
                }

                div {
                    class: "settings-row",
                    label { r#for: "theme", "Theme" }
                    select {
                        id: "theme",
                        value: theme(),
                        onchange: move |evt: FormEvent| {
                            theme.set(evt.value());
                            save_status.set(None);
                        },
                        option { value: "default", "Default" }
                        option { value: "light", "Light" }
                        option { value: "dark", "Dark" }
                    }
                }

                div {
                    class: "settings-row",
                    label { r#for: "font-size", "Font size" }
                    select {
                        id: "font-size",
                        value: font_size(),
                        onchange: move |evt: FormEvent| {
                            font_size.set(evt.value());
                            save_status.set(None);
                        },
                        option { value: "12px", "12px" }
                        option { value: "14px", "14px" }
                        option { value: "16px", "16px" }
                        option { value: "18px", "18px" }
                    }
                }

                div {
                    class: "settings-row",
                    label { r#for: "language", "Language" }
                    input {
                        id: "language",
                        r#type: "text",
                        value: language(),
                        oninput: move |evt: FormEvent| {
                            language.set(evt.value());
                            save_status.set(None);
                        },
                    }
                }

                label {
                    class: "settings-row",
                    input {
                        r#type: "checkbox",
                        checked: show_words(),
                        onchange: move |evt: FormEvent| {
                            show_words.set(evt.checked());
                            save_status.set(None);
                        },
                    }
                    "Show word count"
                }
                label {
                    class: "settings-row",
                    input {
                        r#type: "checkbox",
                        checked: show_chars(),
                        onchange: move |evt: FormEvent| {
                            show_chars.set(evt.checked());
                            save_status.set(None);
                        },
                    }
                    "Show character count"
                }

                div {
                    class: "settings-actions",
                    button { class: "btn btn-primary", onclick: handle_save, "Save" }
                    if let Some(status) = save_status() {
                        span {
                            class: if status == "success" { "status status-ok" } else { "status status-err" },
                            if status == "success" { "Saved" } else { "Error" }
                        }
                    }
                }
            }

            div {
                class: "settings-section",
                h2 { class: "section-title", "Auto-save backups" }
                if backups().is_empty() {
                    p { class: "settings-hint", "No backups yet. They appear as you edit." }
                } else {
                    div {
                        class: "backup-list",
                        for (index, snapshot) in backups().into_iter().enumerate() {
                            BackupRow {
                                key: "{index}",
                                index,
                                snapshot,
                                on_restore: handle_restore,
                            }
                        }
                    }
                }
            }

            div {
                class: "settings-section",
                h2 { class: "section-title", "Data" }
                div {
                    class: "settings-actions",
                    button { class: "btn", onclick: handle_export_json, "Export JSON" }
                    button { class: "btn", onclick: handle_export_csv, "Export CSV" }
                }
                div {
                    class: "settings-row",
                    label { r#for: "import", "Import a JSON export" }
                    input {
                        id: "import",
                        r#type: "file",
                        accept: ".json,application/json",
                        onchange: handle_import,
                    }
                    p {
                        class: "settings-hint",
                        "Imported documents are appended as-is; importing the same file twice duplicates them."
                    }
                }
                div {
                    class: "settings-actions",
                    button {
                        class: "btn btn-danger",
                        onclick: handle_clear,
                        if confirm_clear() { "Really clear everything?" } else { "Clear all data" }
                    }
                    if confirm_clear() {
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| confirm_clear.set(false),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BackupRow(index: usize, snapshot: AutoSaveSnapshot, on_restore: EventHandler<AutoSaveSnapshot>) -> Element {
    let restored = snapshot.clone();
    let taken = snapshot.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
    let position = index + 1;
    rsx! {
        div {
            class: "backup-row",
            span { class: "backup-index", "#{position}" }
            span { "{taken}" }
            span { "{snapshot.word_count} words" }
            button {
                class: "btn btn-small",
                onclick: move |_| on_restore.call(restored.clone()),
                "Restore"
            }
        }
    }
}
