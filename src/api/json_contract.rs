use serde::{Deserialize, Serialize};

use crate::error::{MapViewError, MapViewResult};

use super::SessionSnapshot;

pub const SESSION_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: SessionSnapshot,
}

impl SessionSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> MapViewResult<String> {
        let payload = SessionSnapshotJsonContractV1 {
            schema_version: SESSION_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            MapViewError::Serialization(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> MapViewResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<SessionSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: SessionSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            MapViewError::Serialization(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != SESSION_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(MapViewError::Serialization(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
