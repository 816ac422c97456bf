//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome mounted into the server page and
//! read shared state from Leptos context providers.

pub mod notification_stack;
pub mod status_panel;
