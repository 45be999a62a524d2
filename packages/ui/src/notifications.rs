//! Success and error notices shown after saves, deletes and sign-in steps.
//!
//! Notices are kept for the session so the dashboard's Activity tab can list
//! them; only the most recent undismissed one is shown as a toast.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub timestamp: String,
    pub level: NoticeLevel,
    pub message: String,
    pub dismissed: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifications {
    pub entries: Vec<Notice>,
    next_id: u64,
}

impl Notifications {
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>, timestamp: String) -> u64 {
        self.next_id += 1;
        self.entries.push(Notice {
            id: self.next_id,
            timestamp,
            level,
            message: message.into(),
            dismissed: false,
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        if let Some(notice) = self.entries.iter_mut().find(|n| n.id == id) {
            notice.dismissed = true;
        }
    }

    /// Newest notice still on screen.
    pub fn current(&self) -> Option<&Notice> {
        self.entries.iter().rev().find(|n| !n.dismissed)
    }
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

pub fn notify(notices: &mut Signal<Notifications>, level: NoticeLevel, message: &str) {
    let id = notices.write().push(level, message, current_time());
    schedule_dismiss(*notices, id);
}

/// Record a success, falling back to `default` when the backend sent no message.
pub fn notify_success(notices: &mut Signal<Notifications>, message: Option<String>, default: &str) {
    let message = message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| default.to_string());
    notify(notices, NoticeLevel::Success, &message);
}

pub fn notify_error(notices: &mut Signal<Notifications>, message: &str) {
    notify(notices, NoticeLevel::Error, message);
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(mut notices: Signal<Notifications>, id: u64) {
    spawn(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(5)).await;
        notices.write().dismiss(id);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_: Signal<Notifications>, _: u64) {}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00:00".to_string()
}

/// Toast for the current notice.
#[component]
pub fn NoticeToast() -> Element {
    let mut notices = use_notifications();
    let Some(notice) = notices().current().cloned() else {
        return rsx! {};
    };
    let id = notice.id;
    let class = match notice.level {
        NoticeLevel::Error => "notice notice--error",
        NoticeLevel::Success => "notice notice--success",
        NoticeLevel::Info => "notice notice--info",
    };

    rsx! {
        div {
            class: "{class}",
            role: "status",
            span { "{notice.message}" }
            button {
                class: "notice-close",
                onclick: move |_| notices.write().dismiss(id),
                "×"
            }
        }
    }
}

/// Every notice from this session, newest first.
#[component]
pub fn NoticeHistory() -> Element {
    let mut notices = use_notifications();
    let entries = notices().entries.clone();

    rsx! {
        div {
            class: "notice-history",
            div {
                class: "notice-history-header",
                span { "Recent activity" }
                button {
                    onclick: move |_| notices.write().entries.clear(),
                    "Clear"
                }
            }
            if entries.is_empty() {
                p { class: "empty-state", "Nothing has happened yet in this session." }
            }
            for entry in entries.iter().rev() {
                div {
                    key: "{entry.id}",
                    class: match entry.level {
                        NoticeLevel::Error => "notice-entry error",
                        NoticeLevel::Success => "notice-entry success",
                        NoticeLevel::Info => "notice-entry info",
                    },
                    span { class: "notice-time", "{entry.timestamp}" }
                    span { " {entry.message}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_skips_dismissed() {
        let mut n = Notifications::default();
        let first = n.push(NoticeLevel::Success, "Saved", "10:00:00".into());
        let second = n.push(NoticeLevel::Error, "Oops", "10:00:01".into());
        assert_eq!(n.current().map(|x| x.id), Some(second));

        n.dismiss(second);
        assert_eq!(n.current().map(|x| x.id), Some(first));
        assert_eq!(n.entries.len(), 2);
    }
}
