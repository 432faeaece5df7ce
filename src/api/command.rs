use serde::{Deserialize, Serialize};

use crate::core::{FilterCriteria, FilterValidation, WindowRange};

/// Every user-driven transition the session accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionCommand {
    /// Marker click or list "locate" action.
    Select(String),
    ClearSelection,
    PageForward,
    PageBackward,
    /// Filter form submission.
    ApplyFilters(FilterCriteria),
    ClearFilters,
    SetFiltersEnabled(bool),
}

/// Outcome of reducing one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionUpdate {
    Unchanged,
    WindowMoved {
        window: WindowRange,
    },
    SelectionChanged {
        selected_id: Option<String>,
        window_moved: bool,
    },
    FiltersApplied {
        matched_records: usize,
    },
    /// Submission refused; state untouched and errors go back to the form.
    FiltersRejected {
        validation: FilterValidation,
    },
    FiltersCleared {
        matched_records: usize,
    },
    FiltersToggled {
        enabled: bool,
        matched_records: usize,
    },
}

impl SessionUpdate {
    /// True when session state differs from before the command.
    #[must_use]
    pub fn changes_state(&self) -> bool {
        !matches!(self, Self::Unchanged | Self::FiltersRejected { .. })
    }

    /// True when the filtered view was rebuilt.
    #[must_use]
    pub fn replaces_view(&self) -> bool {
        matches!(
            self,
            Self::FiltersApplied { .. } | Self::FiltersCleared { .. } | Self::FiltersToggled { .. }
        )
    }
}
