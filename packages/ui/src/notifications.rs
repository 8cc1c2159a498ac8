use dioxus::prelude::*;

/// Severity of a transient notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Unique ids so dismissal can't remove the wrong entry.
static NOTICE_COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

pub fn use_notices() -> Signal<Vec<Notice>> {
    use_context::<Signal<Vec<Notice>>>()
}

/// Push a transient, non-blocking notification. On the web it dismisses
/// itself after a few seconds; it can always be dismissed by hand.
pub fn notify(mut notices: Signal<Vec<Notice>>, level: NoticeLevel, message: impl Into<String>) {
    let id = NOTICE_COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
    notices.write().push(Notice {
        id,
        level,
        message: message.into(),
    });

    #[cfg(target_arch = "wasm32")]
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(4_000).await;
        notices.write().retain(|n| n.id != id);
    });
}

#[component]
pub fn NoticeTray() -> Element {
    let notices = use_notices();

    rsx! {
        div {
            class: "notice-tray",
            for notice in notices() {
                NoticeItem { key: "{notice.id}", notice }
            }
        }
    }
}

#[component]
fn NoticeItem(notice: Notice) -> Element {
    let mut notices = use_notices();
    let id = notice.id;
    let class = match notice.level {
        NoticeLevel::Info => "notice notice-info",
        NoticeLevel::Success => "notice notice-success",
        NoticeLevel::Warning => "notice notice-warning",
        NoticeLevel::Error => "notice notice-error",
    };

    rsx! {
        div {
            class: class,
            span { "{notice.message}" }
            button {
                class: "notice-dismiss",
                onclick: move |_| notices.write().retain(|n| n.id != id),
                "×"
            }
        }
    }
}
