//! Stack of dismissible notification banners.

use leptos::prelude::*;

use crate::app::DashboardHandles;
use crate::state::notifications::{Notification, NotificationsState, Severity};

/// Push a notification that expires after the configured TTL.
///
/// Returns the notification id, or `None` once the dashboard is torn down.
pub fn show_notification(handles: DashboardHandles, message: impl Into<String>, severity: Severity) -> Option<String> {
    let id = handles.notifications.try_update(|n| n.push(message, severity))?;

    #[cfg(feature = "csr")]
    {
        let ttl_ms = handles.config.with_value(|c| c.notification_ttl_ms);
        let expiring = id.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ttl_ms))).await;
            handles.notifications.try_update(|n| n.dismiss(&expiring));
        });
    }

    Some(id)
}

/// Fixed-position stack rendering every live notification.
#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <div class="notification-stack" aria-live="polite">
            <For
                each=move || notifications.get().items
                key=|item| item.id.clone()
                children=move |item: Notification| {
                    view! { <NotificationBanner item=item/> }
                }
            />
        </div>
    }
}

#[component]
fn NotificationBanner(item: Notification) -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let id = item.id.clone();
    let on_close = move |_| {
        notifications.update(|n| {
            n.dismiss(&id);
        });
    };

    view! {
        <div class=item.severity.css_class() role="alert">
            <span class="notification__message">{item.message}</span>
            <button class="notification__close" on:click=on_close title="Dismiss" aria-label="Close">
                "✕"
            </button>
        </div>
    }
}
