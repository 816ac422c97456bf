//! Root dashboard component and browser wiring.
//!
//! The server renders the page; this app mounts into `#dashboard-root` (or
//! `<body>` when absent), renders the status panel and notification stack,
//! and owns the poller lifecycle for the page.

use leptos::prelude::*;

use crate::components::notification_stack::NotificationStack;
use crate::components::status_panel::StatusPanel;
use crate::config::DashboardConfig;
use crate::state::notifications::NotificationsState;
use crate::state::poller::PollerState;
use crate::state::status::StatusView;

/// Id of the element the dashboard mounts into.
pub const ROOT_ELEMENT_ID: &str = "dashboard-root";

/// Signals shared by the poller, components and JS exports.
#[derive(Clone, Copy)]
pub struct DashboardHandles {
    pub status: RwSignal<StatusView>,
    pub poller: RwSignal<PollerState>,
    pub notifications: RwSignal<NotificationsState>,
    pub config: StoredValue<DashboardConfig>,
}

impl DashboardHandles {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            status: RwSignal::new(StatusView::default()),
            poller: RwSignal::new(PollerState::default()),
            notifications: RwSignal::new(NotificationsState::default()),
            config: StoredValue::new(config),
        }
    }
}

/// Root dashboard component.
///
/// Provides the shared state contexts and, in the browser, starts polling
/// on allow-listed routes.
#[component]
pub fn App(#[prop(optional)] config: DashboardConfig) -> impl IntoView {
    let handles = DashboardHandles::new(config);

    provide_context(handles);
    provide_context(handles.status);
    provide_context(handles.notifications);

    #[cfg(feature = "csr")]
    wire_browser(handles);

    view! {
        <StatusPanel/>
        <NotificationStack/>
    }
}

/// Mount the dashboard into the page.
#[cfg(feature = "csr")]
pub fn mount() {
    use wasm_bindgen::JsCast;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let root = doc.get_element_by_id(ROOT_ELEMENT_ID);
    let config = root.as_ref().map_or_else(DashboardConfig::default, DashboardConfig::from_element);

    let parent = match root.map(|el| el.dyn_into::<web_sys::HtmlElement>()) {
        Some(Ok(el)) => el,
        _ => {
            let Some(body) = doc.body() else {
                leptos::logging::warn!("no mount point for dashboard");
                return;
            };
            body
        }
    };

    leptos::mount::mount_to(parent, move || view! { <App config=config.clone()/> }).forget();
}

#[cfg(feature = "csr")]
fn current_path() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    match window.location().pathname() {
        Ok(path) => path,
        Err(e) => {
            leptos::logging::warn!("could not read location: {e:?}");
            String::new()
        }
    }
}

#[cfg(feature = "csr")]
fn browser_online() -> bool {
    web_sys::window().map_or(true, |w| w.navigator().on_line())
}

/// Start polling when allowed and hook lifecycle, keyboard and form events.
#[cfg(feature = "csr")]
fn wire_browser(handles: DashboardHandles) {
    use leptos::ev;

    use crate::net::poller::{refresh_status, start_polling, stop_polling};
    use crate::util::keyboard::{Shortcut, close_open_modals, shortcut_for};
    use crate::util::quantity::clamp_input_event;

    crate::bindings::install(handles);

    let path = current_path();
    let polls_here = handles.config.with_value(|c| c.polls_route(&path));
    if polls_here {
        if browser_online() {
            start_polling(handles);
        } else {
            handles.status.update(StatusView::mark_disconnected);
        }
    } else {
        leptos::logging::log!("status polling disabled on {path}");
    }

    let online = window_event_listener(ev::online, move |_| {
        leptos::logging::log!("browser online");
        if polls_here {
            start_polling(handles);
        }
    });
    let offline = window_event_listener(ev::offline, move |_| {
        leptos::logging::warn!("browser offline; pausing status polling");
        stop_polling(handles);
        handles.status.try_update(StatusView::mark_disconnected);
    });
    let pagehide = window_event_listener(ev::pagehide, move |_| stop_polling(handles));
    let keydown = window_event_listener(ev::keydown, move |ev| {
        match shortcut_for(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
            Some(Shortcut::RefreshStatus) => {
                ev.prevent_default();
                refresh_status(handles);
            }
            Some(Shortcut::CloseModals) => close_open_modals(),
            None => {}
        }
    });
    let change = window_event_listener(ev::change, move |ev| clamp_input_event(&ev));

    on_cleanup(move || {
        stop_polling(handles);
        online.remove();
        offline.remove();
        pagehide.remove();
        keydown.remove();
        change.remove();
        crate::bindings::uninstall();
    });
}
