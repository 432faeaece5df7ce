//! resale-map: headless state engine for a resale-property map viewer.
//!
//! The crate keeps three views of a static property dataset consistent: the
//! filtered record sequence, a bounded window of it rendered as a list, and the
//! single record selected on the map. Drawing the map and the list is left to a
//! host-provided [`render::Presenter`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{MapSession, SessionCommand, SessionConfig, SessionUpdate};
pub use error::{MapViewError, MapViewResult};
