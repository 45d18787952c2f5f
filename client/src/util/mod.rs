//! Browser helpers kept apart from page and component logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! `cookie` owns the session token cookie: its text format, and the
//! `TokenStore` seam the session state is written against.

pub mod cookie;
