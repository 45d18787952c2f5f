//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `products`, `modal`) so components
//! depend on small focused models. Each is plain data plus pure transitions;
//! pages wrap them in `RwSignal`s and drive the async calls.

pub mod modal;
pub mod products;
pub mod session;
