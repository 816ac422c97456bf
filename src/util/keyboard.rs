//! Global keyboard shortcuts.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd+R: poll once instead of reloading the page.
    RefreshStatus,
    /// Escape: close open modal overlays.
    CloseModals,
}

/// Map a key press to a dashboard shortcut.
pub fn shortcut_for(key: &str, ctrl: bool, meta: bool) -> Option<Shortcut> {
    match key {
        "r" | "R" if ctrl || meta => Some(Shortcut::RefreshStatus),
        "Escape" => Some(Shortcut::CloseModals),
        _ => None,
    }
}

/// Selector for modal overlays currently shown.
#[cfg(any(test, feature = "csr"))]
const OPEN_MODAL_SELECTOR: &str = ".modal.show";
/// The widget library's own close control inside a modal.
#[cfg(any(test, feature = "csr"))]
const DISMISS_SELECTOR: &str = "[data-bs-dismiss=\"modal\"]";
/// Dimmed overlay the widget library inserts behind an open modal.
#[cfg(any(test, feature = "csr"))]
const BACKDROP_SELECTOR: &str = ".modal-backdrop";
/// Body class the widget library uses to lock page scroll.
#[cfg(any(test, feature = "csr"))]
const BODY_OPEN_CLASS: &str = "modal-open";

/// How one open modal gets closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalClose {
    /// Click the library's dismiss control so it tears down its own backdrop.
    Dismiss,
    /// No dismiss control: hide the dialog directly.
    Hide,
}

impl ModalClose {
    pub fn for_modal(has_dismiss_control: bool) -> Self {
        if has_dismiss_control { Self::Dismiss } else { Self::Hide }
    }
}

/// Whether the backdrop and body scroll lock must be removed by hand.
pub fn needs_page_cleanup(closes: &[ModalClose]) -> bool {
    closes.contains(&ModalClose::Hide)
}

/// Close every open modal overlay on the page.
#[cfg(feature = "csr")]
pub fn close_open_modals() {
    use wasm_bindgen::JsCast;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let modals = match doc.query_selector_all(OPEN_MODAL_SELECTOR) {
        Ok(list) => list,
        Err(e) => {
            leptos::logging::warn!("modal lookup failed: {e:?}");
            return;
        }
    };
    let mut closes = Vec::new();
    for i in 0..modals.length() {
        let Some(node) = modals.item(i) else {
            continue;
        };
        let Ok(modal) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        let dismiss = match modal.query_selector(DISMISS_SELECTOR) {
            Ok(Some(el)) => match el.dyn_into::<web_sys::HtmlElement>() {
                Ok(control) => Some(control),
                Err(_) => None,
            },
            Ok(None) => None,
            Err(e) => {
                leptos::logging::warn!("modal dismiss lookup failed: {e:?}");
                None
            }
        };
        let close = ModalClose::for_modal(dismiss.is_some());
        match (close, dismiss) {
            (ModalClose::Dismiss, Some(control)) => control.click(),
            _ => hide_modal(&modal),
        }
        closes.push(close);
    }
    if needs_page_cleanup(&closes) {
        release_page(&doc);
    }
}

#[cfg(feature = "csr")]
fn hide_modal(modal: &web_sys::HtmlElement) {
    if let Err(e) = modal.class_list().remove_1("show") {
        leptos::logging::warn!("modal close failed: {e:?}");
    }
    if let Err(e) = modal.style().set_property("display", "none") {
        leptos::logging::warn!("modal hide failed: {e:?}");
    }
    if let Err(e) = modal.set_attribute("aria-hidden", "true") {
        leptos::logging::warn!("modal aria update failed: {e:?}");
    }
}

/// Drop the backdrops and undo the body scroll lock.
#[cfg(feature = "csr")]
fn release_page(doc: &web_sys::Document) {
    match doc.query_selector_all(BACKDROP_SELECTOR) {
        Ok(backdrops) => {
            for i in 0..backdrops.length() {
                if let Some(node) = backdrops.item(i)
                    && let Some(parent) = node.parent_node()
                    && let Err(e) = parent.remove_child(&node)
                {
                    leptos::logging::warn!("backdrop removal failed: {e:?}");
                }
            }
        }
        Err(e) => leptos::logging::warn!("backdrop lookup failed: {e:?}"),
    }
    let Some(body) = doc.body() else {
        return;
    };
    if let Err(e) = body.class_list().remove_1(BODY_OPEN_CLASS) {
        leptos::logging::warn!("body unlock failed: {e:?}");
    }
    let style = body.style();
    for property in ["overflow", "padding-right"] {
        if let Err(e) = style.remove_property(property) {
            leptos::logging::warn!("body style reset failed: {e:?}");
        }
    }
}
