use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::modal::Modal;

/// One alert waiting to be acknowledged by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub text: String,
}

/// Centralized error alerts. Only the latest alert is shown; a new one
/// replaces whatever is on screen.
#[derive(Clone, Copy)]
pub struct NotificationService {
    current: RwSignal<Option<Notification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    /// Show an error alert
    pub fn error(&self, title: impl Into<String>, text: impl Into<String>) {
        let notification = Notification {
            title: title.into(),
            text: text.into(),
        };
        log::debug!("notification: {} - {}", notification.title, notification.text);
        self.current.set(Some(notification));
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    pub fn current(&self) -> Option<Notification> {
        self.current.get()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the service provided by [`crate::app::App`]
pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the active alert, if any, as a modal dialog
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications = use_notifications();
    let on_close = Callback::new(move |_| notifications.dismiss());

    move || {
        notifications.current().map(|n| {
            view! {
                <Modal title=n.title class="modal--error" on_close=on_close>
                    <div class="notification notification--error">
                        <span class="notification__icon">{icon("alert")}</span>
                        <p class="notification__text">{n.text}</p>
                    </div>
                    <div class="modal-footer">
                        <button class="button button--primary" on:click=move |_| notifications.dismiss()>
                            "OK"
                        </button>
                    </div>
                </Modal>
            }
        })
    }
}
