use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{FilteredView, Record};
use crate::error::{MapViewError, MapViewResult};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
pub const DEFAULT_MAX_VISIBLE_COUNT: usize = 10;

/// Paging step and window capacity.
///
/// Deserialization goes through [`WindowConfig::validate`], so a zero size
/// read from JSON is rejected the same way as one passed to `new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWindowConfig")]
pub struct WindowConfig {
    pub items_per_page: usize,
    pub max_visible_count: usize,
}

#[derive(Deserialize)]
struct RawWindowConfig {
    items_per_page: usize,
    max_visible_count: usize,
}

impl TryFrom<RawWindowConfig> for WindowConfig {
    type Error = MapViewError;

    fn try_from(raw: RawWindowConfig) -> MapViewResult<Self> {
        Self::new(raw.items_per_page, raw.max_visible_count)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            max_visible_count: DEFAULT_MAX_VISIBLE_COUNT,
        }
    }
}

impl WindowConfig {
    pub fn new(items_per_page: usize, max_visible_count: usize) -> MapViewResult<Self> {
        Self {
            items_per_page,
            max_visible_count,
        }
        .validate()
    }

    pub fn validate(self) -> MapViewResult<Self> {
        if self.items_per_page == 0 {
            return Err(MapViewError::InvalidConfig(
                "window items_per_page must be > 0".to_owned(),
            ));
        }
        if self.max_visible_count == 0 {
            return Err(MapViewError::InvalidConfig(
                "window max_visible_count must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Inclusive `[left, right]` index pair over a filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowRange {
    pub left: usize,
    pub right: usize,
}

impl WindowRange {
    #[must_use]
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// Number of indices covered, both edges included. An inverted pair
    /// counts as a single index.
    #[must_use]
    pub fn count(self) -> usize {
        self.right.saturating_sub(self.left) + 1
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        index >= self.left && index <= self.right
    }
}

/// Page position shown next to the list's paging controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub current_page: usize,
    pub page_count: usize,
    pub can_page_forward: bool,
    pub can_page_backward: bool,
}

/// Number of pages needed to show `len` records, `items_per_page` at a time.
#[must_use]
pub fn page_count(len: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    len.div_ceil(items_per_page)
}

/// One-based page number of the page starting at `left`.
#[must_use]
pub fn current_page(left: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    left / items_per_page + 1
}

/// Bounded index range over the current filtered view.
///
/// `range` is `None` exactly when the view is empty. Every operation clamps
/// into `[0, len - 1]` and never produces an inverted range. The window is
/// serializable for diagnostics but only built through [`SlidingWindow::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlidingWindow {
    config: WindowConfig,
    range: Option<WindowRange>,
    len: usize,
}

impl SlidingWindow {
    pub fn new(config: WindowConfig) -> MapViewResult<Self> {
        Ok(Self {
            config: config.validate()?,
            range: None,
            len: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> WindowConfig {
        self.config
    }

    #[must_use]
    pub fn range(&self) -> Option<WindowRange> {
        self.range
    }

    /// Length of the view the window was last computed against.
    #[must_use]
    pub fn view_len(&self) -> usize {
        self.len
    }

    /// Resets to the first page of a freshly replaced view.
    pub fn initialize(&mut self, view: &FilteredView) {
        self.len = view.len();
        self.range = (self.len > 0).then(|| {
            WindowRange::new(0, (self.config.max_visible_count - 1).min(self.len - 1))
        });
        debug!(len = self.len, range = ?self.range, "window initialized");
    }

    #[must_use]
    pub fn can_page_forward(&self) -> bool {
        self.range.is_some_and(|range| range.right + 1 < self.len)
    }

    #[must_use]
    pub fn can_page_backward(&self) -> bool {
        self.range.is_some_and(|range| range.left > 0)
    }

    /// Advances the right edge by one page step. Returns `true` when moved.
    pub fn page_forward(&mut self) -> bool {
        let Some(range) = self.range.filter(|_| self.can_page_forward()) else {
            return false;
        };
        let last = self.len - 1;
        let right = (range.right + self.config.items_per_page).min(last);
        let left = (right + 1).saturating_sub(self.config.max_visible_count);
        self.set_range(WindowRange::new(left, right), "page forward");
        true
    }

    /// Moves the left edge back by one page step. Returns `true` when moved.
    pub fn page_backward(&mut self) -> bool {
        let Some(range) = self.range.filter(|_| self.can_page_backward()) else {
            return false;
        };
        let last = self.len - 1;
        let left = range.left.saturating_sub(self.config.items_per_page);
        let right = (left + self.config.max_visible_count - 1).min(last);
        self.set_range(WindowRange::new(left, right), "page backward");
        true
    }

    /// Snaps the window to the fixed page containing `id`.
    ///
    /// Pages start at multiples of `max_visible_count`, unlike the
    /// step-relative edges produced by paging. An id missing from `view`
    /// leaves the window untouched. Returns `true` when the range changed.
    pub fn jump_to(&mut self, id: &str, view: &FilteredView) -> bool {
        let Some(index) = view.position_of(id) else {
            trace!(id, "jump target not in view");
            return false;
        };
        self.len = view.len();
        let capacity = self.config.max_visible_count;
        let left = (index / capacity) * capacity;
        let right = (left + capacity - 1).min(self.len - 1);
        let next = WindowRange::new(left, right);
        if self.range == Some(next) {
            return false;
        }
        self.set_range(next, "jump to record");
        true
    }

    /// Records inside the window, in view order.
    #[must_use]
    pub fn visible_slice<'a>(&self, view: &'a FilteredView) -> &'a [Arc<Record>] {
        let Some(range) = self.range else {
            return &[];
        };
        let records = view.records();
        if range.left >= records.len() {
            return &[];
        }
        let right = range.right.min(records.len() - 1);
        &records[range.left..=right]
    }

    #[must_use]
    pub fn page_info(&self) -> PageInfo {
        match self.range {
            None => PageInfo::default(),
            Some(range) => PageInfo {
                current_page: current_page(range.left, self.config.items_per_page),
                page_count: page_count(self.len, self.config.items_per_page),
                can_page_forward: self.can_page_forward(),
                can_page_backward: self.can_page_backward(),
            },
        }
    }

    fn set_range(&mut self, range: WindowRange, reason: &'static str) {
        debug_assert!(range.left <= range.right && range.right < self.len);
        self.range = Some(range);
        debug!(
            left = range.left,
            right = range.right,
            len = self.len,
            reason,
            "window moved"
        );
    }
}
