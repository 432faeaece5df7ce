use std::sync::Arc;

use crate::core::{BoundingBox, FilterBadge, GeoCollection, PageInfo, Record, WindowRange};
use crate::error::{MapViewError, MapViewResult};

/// Everything a presenter needs for one map + list draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionFrame {
    pub features: GeoCollection,
    pub visible: Vec<Arc<Record>>,
    pub window: Option<WindowRange>,
    pub page: PageInfo,
    pub total_records: usize,
    pub matched_records: usize,
    pub max_visible_count: usize,
    pub selected_id: Option<String>,
    pub active_filters: Vec<FilterBadge>,
    pub map_max_bounds: BoundingBox,
}

impl SessionFrame {
    /// Checks the window/slice invariants before anything is drawn.
    pub fn validate(&self) -> MapViewResult<()> {
        if self.features.len() != self.matched_records {
            return Err(MapViewError::InvalidData(format!(
                "frame carries {} features for {} matched records",
                self.features.len(),
                self.matched_records
            )));
        }
        if self.visible.len() > self.max_visible_count {
            return Err(MapViewError::InvalidData(format!(
                "frame renders {} rows but at most {} are allowed",
                self.visible.len(),
                self.max_visible_count
            )));
        }

        match self.window {
            None if self.matched_records > 0 => {
                return Err(MapViewError::InvalidData(
                    "non-empty result set must have a window".to_owned(),
                ));
            }
            None => {}
            Some(range) => {
                if range.left > range.right || range.right >= self.matched_records {
                    return Err(MapViewError::InvalidData(format!(
                        "window [{}, {}] is out of bounds for {} records",
                        range.left, range.right, self.matched_records
                    )));
                }
                if range.count() != self.visible.len() {
                    return Err(MapViewError::InvalidData(
                        "visible slice does not match window range".to_owned(),
                    ));
                }
            }
        }

        if self.features.selected().count() > 1 {
            return Err(MapViewError::InvalidData(
                "at most one feature may be selected".to_owned(),
            ));
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matched_records == 0
    }
}
