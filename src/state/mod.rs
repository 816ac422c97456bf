//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs wrapped in `RwSignal`s by the app root. Keeping them free of
//! browser types lets the scheduling and render-sync rules test natively.

pub mod notifications;
pub mod poller;
pub mod status;
