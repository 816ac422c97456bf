//! DOM bindings for the table helpers.
//!
//! Operates on server-rendered `<table id=...>` elements: reads cell text,
//! reinserts body rows in sorted order, toggles row visibility and builds the
//! CSV download. Every lookup is guarded; a missing table, body or column is
//! a silent no-op. Requires a browser environment.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlTableElement, HtmlTableRowElement, HtmlTableSectionElement};

use super::table::{SORT_CLASSES, SortMemory, matches_filter, sorted_order, to_csv};

const CSV_MIME: &str = "text/csv;charset=utf-8;";

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

fn find_table(table_id: &str) -> Option<HtmlTableElement> {
    let element = document()?.get_element_by_id(table_id)?;
    match element.dyn_into::<HtmlTableElement>() {
        Ok(table) => Some(table),
        Err(_) => {
            leptos::logging::debug_warn!("#{table_id} is not a table");
            None
        }
    }
}

fn section_rows(section: &HtmlTableSectionElement) -> Vec<HtmlTableRowElement> {
    let rows = section.rows();
    let mut out = Vec::with_capacity(rows.length() as usize);
    for i in 0..rows.length() {
        let Some(el) = rows.item(i) else {
            continue;
        };
        if let Ok(row) = el.dyn_into::<HtmlTableRowElement>() {
            out.push(row);
        }
    }
    out
}

fn first_body(table: &HtmlTableElement) -> Option<HtmlTableSectionElement> {
    let body = table.t_bodies().item(0)?;
    let Ok(section) = body.dyn_into::<HtmlTableSectionElement>() else {
        return None;
    };
    Some(section)
}

fn body_rows(table: &HtmlTableElement) -> Vec<HtmlTableRowElement> {
    first_body(table).map(|body| section_rows(&body)).unwrap_or_default()
}

fn header_rows(table: &HtmlTableElement) -> Vec<HtmlTableRowElement> {
    table.t_head().map(|head| section_rows(&head)).unwrap_or_default()
}

fn row_texts(row: &HtmlTableRowElement) -> Vec<String> {
    let cells = row.cells();
    (0..cells.length())
        .filter_map(|i| cells.item(i))
        .map(|cell| cell.text_content().unwrap_or_default())
        .collect()
}

fn cell_text(row: &HtmlTableRowElement, column: usize) -> String {
    let Ok(index) = u32::try_from(column) else {
        return String::new();
    };
    row.cells()
        .item(index)
        .and_then(|cell| cell.text_content())
        .unwrap_or_default()
}

fn is_visible(row: &HtmlTableRowElement) -> bool {
    row.style().get_property_value("display").map_or(true, |d| d != "none")
}

fn set_visible(row: &HtmlElement, visible: bool) {
    let result = if visible {
        row.style().remove_property("display").map(|_| ())
    } else {
        row.style().set_property("display", "none")
    };
    if let Err(e) = result {
        leptos::logging::warn!("row visibility update failed: {e:?}");
    }
}

/// Sort the body rows of `table_id` by `column`, toggling direction on repeat.
pub fn sort_table(memory: &mut SortMemory, table_id: &str, column: usize, numeric: bool) {
    let Some(table) = find_table(table_id) else {
        return;
    };
    let Some(body) = first_body(&table) else {
        return;
    };
    let direction = memory.next_direction(table_id, column);
    let rows = section_rows(&body);
    let keys: Vec<String> = rows.iter().map(|row| cell_text(row, column)).collect();

    for index in sorted_order(&keys, numeric, direction) {
        if let Err(e) = body.append_child(&rows[index]) {
            leptos::logging::warn!("row reinsert failed: {e:?}");
            return;
        }
    }

    if let Some(header) = header_rows(&table).first() {
        let cells = header.cells();
        for i in 0..cells.length() {
            let Some(cell) = cells.item(i) else {
                continue;
            };
            let classes = cell.class_list();
            for class in SORT_CLASSES {
                if let Err(e) = classes.remove_1(class) {
                    leptos::logging::warn!("sort indicator clear failed: {e:?}");
                }
            }
            if usize::try_from(i).is_ok_and(|i| i == column) {
                if let Err(e) = classes.add_1(direction.header_class()) {
                    leptos::logging::warn!("sort indicator update failed: {e:?}");
                }
            }
        }
    }
}

/// Hide body rows whose `column` text does not contain `filter_text`.
pub fn filter_table(table_id: &str, filter_text: &str, column: usize) {
    let Some(table) = find_table(table_id) else {
        return;
    };
    for row in body_rows(&table) {
        let visible = matches_filter(&cell_text(&row, column), filter_text);
        set_visible(&row, visible);
    }
}

/// Download header rows plus visible body rows of `table_id` as CSV.
/// Returns whether a download was started.
pub fn export_table_to_csv(table_id: &str, filename: &str) -> bool {
    let Some(table) = find_table(table_id) else {
        return false;
    };
    let mut rows: Vec<Vec<String>> = header_rows(&table).iter().map(row_texts).collect();
    rows.extend(body_rows(&table).iter().filter(|row| is_visible(row)).map(row_texts));

    match download_text(&to_csv(&rows), filename, CSV_MIME) {
        Ok(()) => true,
        Err(e) => {
            leptos::logging::warn!("csv export failed: {e:?}");
            false
        }
    }
}

fn download_text(contents: &str, filename: &str, mime: &str) -> Result<(), wasm_bindgen::JsValue> {
    let doc = document().ok_or_else(|| wasm_bindgen::JsValue::from_str("no document"))?;
    let body = doc.body().ok_or_else(|| wasm_bindgen::JsValue::from_str("no body"))?;

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor = doc.create_element("a")?.dyn_into::<web_sys::HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.style().set_property("display", "none")?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    web_sys::Url::revoke_object_url(&url)
}
