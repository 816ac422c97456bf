//! Utility helpers shared across dashboard modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers (formatting, table comparators, CSV, shortcut mapping,
//! quantity clamping) live beside the thin DOM adapters that apply them.

pub mod format;
pub mod keyboard;
pub mod quantity;
pub mod table;
#[cfg(feature = "csr")]
pub mod table_dom;
