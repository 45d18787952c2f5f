//! Networking modules for the catalog REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the HTTP calls and the traits the UI state is written
//! against, `types` defines the wire schema, and `error` the failure type
//! every call returns.

pub mod api;
pub mod error;
pub mod types;
