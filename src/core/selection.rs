use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{BoundingBox, FilteredView, GeoPoint, Record};

pub const DEFAULT_FIT_BOUNDS_PADDING: f64 = 40.0;
pub const DEFAULT_FIT_BOUNDS_DURATION_MS: u64 = 1_000;

/// Camera move requested from the map renderer after a selection change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitBoundsRequest {
    pub bounds: BoundingBox,
    pub padding: f64,
    pub duration_ms: u64,
}

/// List row that should be scrolled into view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollTarget {
    pub record_id: String,
    /// Position of the row inside the visible slice.
    pub row: usize,
}

/// Owns the single selected record id shared by the map and the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCoordinator {
    selected_id: Option<String>,
}

impl SelectionCoordinator {
    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }

    /// Selects `id` when it is part of `view`.
    ///
    /// An id outside the view is a lookup miss and leaves the selection as it
    /// was. Returns `true` when the selected id changed.
    pub fn select(&mut self, id: &str, view: &FilteredView) -> bool {
        if !view.contains(id) {
            trace!(id, "selection target not in view");
            return false;
        }
        if self.is_selected(id) {
            return false;
        }
        debug!(id, previous = ?self.selected_id, "selection changed");
        self.selected_id = Some(id.to_owned());
        true
    }

    /// Returns `true` when a selection was cleared.
    pub fn clear(&mut self) -> bool {
        let cleared = self.selected_id.take();
        if cleared.is_some() {
            debug!(previous = ?cleared, "selection cleared");
        }
        cleared.is_some()
    }

    /// Re-checks the selection against a replaced view.
    ///
    /// A selection that no longer passes the filter stays set so the highlight
    /// returns when the filter is relaxed. Returns whether it is still in view.
    pub fn on_filter_changed(&mut self, view: &FilteredView) -> bool {
        let Some(id) = self.selected_id.as_deref() else {
            return false;
        };
        let in_view = view.contains(id);
        if !in_view {
            debug!(id, "selected record filtered out; keeping selection");
        }
        in_view
    }

    /// Selected record resolved against `view`.
    #[must_use]
    pub fn resolve<'a>(&self, view: &'a FilteredView) -> Option<&'a Arc<Record>> {
        let id = self.selected_id.as_deref()?;
        view.position_of(id).and_then(|index| view.get(index))
    }

    /// One-point bounding box around the selected record.
    ///
    /// `None` when nothing is selected, the record is not in `view`, or its
    /// coordinates are not plottable.
    #[must_use]
    pub fn fit_bounds_request(
        &self,
        view: &FilteredView,
        padding: f64,
        duration_ms: u64,
    ) -> Option<FitBoundsRequest> {
        let record = self.resolve(view)?;
        let point = GeoPoint::from_record(record);
        if !point.is_plottable() {
            warn!(
                id = %record.id,
                "selected record has malformed coordinates; skipping fit bounds"
            );
            return None;
        }
        Some(FitBoundsRequest {
            bounds: BoundingBox::around_point(point),
            padding,
            duration_ms,
        })
    }

    /// Row of the selected record inside the rendered slice, if rendered.
    #[must_use]
    pub fn scroll_target(&self, visible: &[Arc<Record>]) -> Option<ScrollTarget> {
        let id = self.selected_id.as_deref()?;
        visible
            .iter()
            .position(|record| record.id == id)
            .map(|row| ScrollTarget {
                record_id: id.to_owned(),
                row,
            })
    }
}
