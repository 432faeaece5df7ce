//! Session facade: reducer state, command dispatch, observers and snapshots.

mod command;
mod json_contract;
mod observer_dispatch;
mod observer_registry;
mod session;
mod session_config;
mod session_state;
mod snapshot;

pub use command::{SessionCommand, SessionUpdate};
pub use json_contract::{SESSION_SNAPSHOT_JSON_SCHEMA_V1, SessionSnapshotJsonContractV1};
pub use session::MapSession;
pub use session_config::SessionConfig;
pub use session_state::SessionState;
pub use snapshot::SessionSnapshot;
