use serde::{Deserialize, Serialize};

use crate::core::WindowRange;

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub total_records: usize,
    pub matched_records: usize,
    pub filters_enabled: bool,
    pub window: Option<WindowRange>,
    pub selected_id: Option<String>,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    ViewReplaced { matched_records: usize },
    FiltersRejected { error_count: usize },
    WindowChanged { window: Option<WindowRange> },
    SelectionChanged { selected_id: Option<String> },
    Rendered,
}

/// Extension hook interface for bounded custom logic such as analytics or
/// URL syncing.
///
/// Observers see events and context without mutating session state.
pub trait SessionObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &SessionEvent, context: &ObserverContext);
}
