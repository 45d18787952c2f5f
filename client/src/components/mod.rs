//! Reusable UI components for the catalog console.
//!
//! ARCHITECTURE
//! ============
//! Components render state handed to them as signals and report user intent
//! through callbacks. Backend calls stay in `pages`, except the modal's image
//! upload, which only ever touches the modal draft.

pub mod pagination;
pub mod product_detail;
pub mod product_modal;
pub mod product_table;
