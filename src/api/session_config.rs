use serde::{Deserialize, Serialize};

use crate::core::selection::{DEFAULT_FIT_BOUNDS_DURATION_MS, DEFAULT_FIT_BOUNDS_PADDING};
use crate::core::window::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_MAX_VISIBLE_COUNT};
use crate::core::{BoundingBox, WindowConfig};
use crate::error::{MapViewError, MapViewResult};

/// Public session bootstrap configuration.
///
/// This type is serializable so host applications can persist/load viewer
/// setup without inventing their own ad-hoc format. Missing fields fall back
/// to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    #[serde(default = "default_max_visible_count")]
    pub max_visible_count: usize,
    #[serde(default = "default_fit_bounds_padding")]
    pub fit_bounds_padding: f64,
    #[serde(default = "default_fit_bounds_duration_ms")]
    pub fit_bounds_duration_ms: u64,
    #[serde(default = "default_filters_enabled")]
    pub filters_enabled: bool,
    #[serde(default = "default_map_max_bounds")]
    pub map_max_bounds: BoundingBox,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            max_visible_count: default_max_visible_count(),
            fit_bounds_padding: default_fit_bounds_padding(),
            fit_bounds_duration_ms: default_fit_bounds_duration_ms(),
            filters_enabled: default_filters_enabled(),
            map_max_bounds: default_map_max_bounds(),
        }
    }

    /// Sets the paging step used by forward/backward paging.
    #[must_use]
    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    /// Sets how many list rows are rendered at once.
    #[must_use]
    pub fn with_max_visible_count(mut self, max_visible_count: usize) -> Self {
        self.max_visible_count = max_visible_count;
        self
    }

    #[must_use]
    pub fn with_fit_bounds(mut self, padding: f64, duration_ms: u64) -> Self {
        self.fit_bounds_padding = padding;
        self.fit_bounds_duration_ms = duration_ms;
        self
    }

    /// Sets whether filter criteria apply from the start.
    #[must_use]
    pub fn with_filters_enabled(mut self, enabled: bool) -> Self {
        self.filters_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_map_max_bounds(mut self, bounds: BoundingBox) -> Self {
        self.map_max_bounds = bounds;
        self
    }

    pub fn window_config(self) -> MapViewResult<WindowConfig> {
        WindowConfig::new(self.items_per_page, self.max_visible_count)
    }

    pub fn validate(self) -> MapViewResult<Self> {
        self.window_config()?;
        if !self.fit_bounds_padding.is_finite() || self.fit_bounds_padding < 0.0 {
            return Err(MapViewError::InvalidConfig(
                "fit bounds padding must be finite and >= 0".to_owned(),
            ));
        }
        let bounds = self.map_max_bounds;
        if bounds.as_array().iter().any(|value| !value.is_finite())
            || bounds.min_longitude > bounds.max_longitude
            || bounds.min_latitude > bounds.max_latitude
        {
            return Err(MapViewError::InvalidConfig(
                "map max bounds must be finite with min <= max".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_max_visible_count() -> usize {
    DEFAULT_MAX_VISIBLE_COUNT
}

fn default_fit_bounds_padding() -> f64 {
    DEFAULT_FIT_BOUNDS_PADDING
}

fn default_fit_bounds_duration_ms() -> u64 {
    DEFAULT_FIT_BOUNDS_DURATION_MS
}

fn default_filters_enabled() -> bool {
    true
}

fn default_map_max_bounds() -> BoundingBox {
    BoundingBox::LOWER_MAINLAND
}
