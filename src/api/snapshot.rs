use serde::{Deserialize, Serialize};

use crate::core::{FilterCriteria, PageInfo, WindowRange};
use crate::error::{MapViewError, MapViewResult};
use crate::render::Presenter;

use super::{MapSession, SessionConfig, SessionState};

/// Deterministic view of session state for regression fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub config: SessionConfig,
    pub total_records: usize,
    pub matched_records: usize,
    pub filters_enabled: bool,
    pub active_criteria: Option<FilterCriteria>,
    pub window: Option<WindowRange>,
    pub page: PageInfo,
    pub selected_id: Option<String>,
    pub selected_in_view: bool,
    pub visible_ids: Vec<String>,
}

impl SessionState {
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let selected_id = self.selected_id().map(str::to_owned);
        let selected_in_view = selected_id
            .as_deref()
            .is_some_and(|id| self.view().contains(id));
        SessionSnapshot {
            config: self.config(),
            total_records: self.store().len(),
            matched_records: self.view().len(),
            filters_enabled: self.filters_enabled(),
            active_criteria: self.active_criteria().cloned(),
            window: self.window_range(),
            page: self.page_info(),
            selected_id,
            selected_in_view,
            visible_ids: self
                .visible_records()
                .iter()
                .map(|record| record.id.clone())
                .collect(),
        }
    }
}

impl<P: Presenter> MapSession<P> {
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.snapshot()
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> MapViewResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| MapViewError::Serialization(format!("failed to serialize snapshot: {e}")))
    }
}
