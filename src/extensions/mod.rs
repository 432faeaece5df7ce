//! Optional hooks layered on top of the session.
//!
//! Keep extensions read-only and out of the core recomputation path.

pub mod observers;

pub use observers::{ObserverContext, SessionEvent, SessionObserver};
