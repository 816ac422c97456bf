//! Networking for the status endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs one request, `poller` schedules requests and feeds results
//! into the status view, and `types` defines the wire schema.

pub mod api;
#[cfg(feature = "csr")]
pub mod poller;
pub mod types;
