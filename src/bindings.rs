//! JavaScript exports for the server-rendered templates.
//!
//! Templates call these from inline handlers, e.g.
//! `onclick="sortTable('opportunities', 7, true)"`. The table helpers are
//! stateless per call apart from the remembered sort direction; the status
//! and notification exports reach the mounted app through the handles
//! installed by `App`.

use std::cell::RefCell;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::app::DashboardHandles;
use crate::components::notification_stack::show_notification;
use crate::state::notifications::Severity;
use crate::util::table::SortMemory;
use crate::util::table_dom;

const DEFAULT_EXPORT_FILENAME: &str = "export.csv";

thread_local! {
    static HANDLES: RefCell<Option<DashboardHandles>> = const { RefCell::new(None) };
    static SORT_MEMORY: RefCell<SortMemory> = RefCell::new(SortMemory::default());
}

pub(crate) fn install(handles: DashboardHandles) {
    HANDLES.with(|h| *h.borrow_mut() = Some(handles));
}

pub(crate) fn uninstall() {
    HANDLES.with(|h| *h.borrow_mut() = None);
}

fn handles() -> Option<DashboardHandles> {
    let handles = HANDLES.with(|h| *h.borrow());
    if handles.is_none() {
        leptos::logging::warn!("dashboard not mounted");
    }
    handles
}

fn column_index(column: u32) -> usize {
    usize::try_from(column).unwrap_or(usize::MAX)
}

#[wasm_bindgen(js_name = sortTable)]
pub fn sort_table(table_id: &str, column: u32, numeric: Option<bool>) {
    SORT_MEMORY.with(|memory| {
        table_dom::sort_table(&mut memory.borrow_mut(), table_id, column_index(column), numeric.unwrap_or(false));
    });
}

#[wasm_bindgen(js_name = filterTable)]
pub fn filter_table(table_id: &str, filter_text: &str, column: u32) {
    table_dom::filter_table(table_id, filter_text, column_index(column));
}

#[wasm_bindgen(js_name = exportTableToCSV)]
pub fn export_table_to_csv(table_id: &str, filename: Option<String>) {
    let filename = filename.filter(|f| !f.trim().is_empty());
    let filename = filename.as_deref().unwrap_or(DEFAULT_EXPORT_FILENAME);
    if table_dom::export_table_to_csv(table_id, filename) {
        if let Some(handles) = handles() {
            show_notification(handles, format!("Exported {filename}"), Severity::Success);
        }
    }
}

#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification_js(message: &str, severity: Option<String>) {
    let severity = severity.as_deref().map_or(Severity::Info, Severity::from_name);
    if let Some(handles) = handles() {
        show_notification(handles, message, severity);
    }
}

#[wasm_bindgen(js_name = refreshStatus)]
pub fn refresh_status() {
    if let Some(handles) = handles() {
        crate::net::poller::refresh_status(handles);
    }
}
