use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::filter::{apply, validate};
use crate::core::{
    FilterCriteria, FilteredView, FitBoundsRequest, GeoCollection, PageInfo, Record, RecordStore,
    ScrollTarget, SelectionCoordinator, SlidingWindow, WindowRange, project,
};
use crate::error::MapViewResult;

use super::{SessionCommand, SessionConfig, SessionUpdate};

/// All mutable viewer state in one place.
///
/// Each component keeps ownership of its own piece: the store owns the
/// records, the window owns its range and the coordinator owns the selected
/// id. `reduce` is the only entry point that changes any of them.
#[derive(Debug, Clone)]
pub struct SessionState {
    config: SessionConfig,
    store: RecordStore,
    criteria: Option<FilterCriteria>,
    filters_enabled: bool,
    view: FilteredView,
    window: SlidingWindow,
    selection: SelectionCoordinator,
}

impl SessionState {
    pub fn new(records: Vec<Record>, config: SessionConfig) -> MapViewResult<Self> {
        let config = config.validate()?;
        let store = RecordStore::new(records);
        let view = store.full_view();
        let mut window = SlidingWindow::new(config.window_config()?)?;
        window.initialize(&view);

        Ok(Self {
            filters_enabled: config.filters_enabled,
            config,
            store,
            criteria: None,
            view,
            window,
            selection: SelectionCoordinator::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    #[must_use]
    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    #[must_use]
    pub fn window(&self) -> &SlidingWindow {
        &self.window
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionCoordinator {
        &self.selection
    }

    /// Last accepted criteria, kept while filtering is toggled off.
    #[must_use]
    pub fn active_criteria(&self) -> Option<&FilterCriteria> {
        self.criteria.as_ref()
    }

    #[must_use]
    pub fn filters_enabled(&self) -> bool {
        self.filters_enabled
    }

    #[must_use]
    pub fn window_range(&self) -> Option<WindowRange> {
        self.window.range()
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selection.selected_id()
    }

    #[must_use]
    pub fn visible_records(&self) -> &[Arc<Record>] {
        self.window.visible_slice(&self.view)
    }

    #[must_use]
    pub fn page_info(&self) -> PageInfo {
        self.window.page_info()
    }

    /// Map features for the current view with the selection tagged.
    #[must_use]
    pub fn geo_collection(&self) -> GeoCollection {
        project(self.view.records(), self.selection.selected_id())
    }

    #[must_use]
    pub fn fit_bounds_request(&self) -> Option<FitBoundsRequest> {
        self.selection.fit_bounds_request(
            &self.view,
            self.config.fit_bounds_padding,
            self.config.fit_bounds_duration_ms,
        )
    }

    #[must_use]
    pub fn scroll_target(&self) -> Option<ScrollTarget> {
        self.selection.scroll_target(self.visible_records())
    }

    /// Consumes the state and returns the reduced state with its update.
    #[must_use]
    pub fn reduced(mut self, command: SessionCommand) -> (Self, SessionUpdate) {
        let update = self.reduce(command);
        (self, update)
    }

    /// Applies one command with explicit, ordered recomputation.
    pub fn reduce(&mut self, command: SessionCommand) -> SessionUpdate {
        match command {
            SessionCommand::Select(id) => self.select(id),
            SessionCommand::ClearSelection => {
                if self.selection.clear() {
                    SessionUpdate::SelectionChanged {
                        selected_id: None,
                        window_moved: false,
                    }
                } else {
                    SessionUpdate::Unchanged
                }
            }
            SessionCommand::PageForward => {
                let moved = self.window.page_forward();
                self.window_update(moved)
            }
            SessionCommand::PageBackward => {
                let moved = self.window.page_backward();
                self.window_update(moved)
            }
            SessionCommand::ApplyFilters(criteria) => self.apply_filters(criteria),
            SessionCommand::ClearFilters => {
                if self.criteria.is_none() {
                    return SessionUpdate::Unchanged;
                }
                self.criteria = None;
                self.refresh_view();
                SessionUpdate::FiltersCleared {
                    matched_records: self.view.len(),
                }
            }
            SessionCommand::SetFiltersEnabled(enabled) => {
                if enabled == self.filters_enabled {
                    return SessionUpdate::Unchanged;
                }
                self.filters_enabled = enabled;
                self.refresh_view();
                SessionUpdate::FiltersToggled {
                    enabled,
                    matched_records: self.view.len(),
                }
            }
        }
    }

    fn select(&mut self, id: String) -> SessionUpdate {
        let changed = self.selection.select(&id, &self.view);
        let window_moved = self.window.jump_to(&id, &self.view);
        if changed {
            return SessionUpdate::SelectionChanged {
                selected_id: Some(id),
                window_moved,
            };
        }
        self.window_update(window_moved)
    }

    fn apply_filters(&mut self, criteria: FilterCriteria) -> SessionUpdate {
        let validation = validate(&criteria);
        if validation.has_errors() {
            warn!(
                error_count = validation.errors.count(),
                "rejected filter submission"
            );
            return SessionUpdate::FiltersRejected { validation };
        }

        self.criteria = Some(criteria);
        self.filters_enabled = true;
        self.refresh_view();
        SessionUpdate::FiltersApplied {
            matched_records: self.view.len(),
        }
    }

    fn window_update(&self, moved: bool) -> SessionUpdate {
        match self.window.range() {
            Some(window) if moved => SessionUpdate::WindowMoved { window },
            _ => SessionUpdate::Unchanged,
        }
    }

    /// Rebuilds the view, then the window, then re-checks the selection.
    fn refresh_view(&mut self) {
        self.view = match (&self.criteria, self.filters_enabled) {
            (Some(criteria), true) => apply(self.store.records(), criteria),
            _ => self.store.full_view(),
        };
        self.window.initialize(&self.view);
        let selection_in_view = self.selection.on_filter_changed(&self.view);
        debug!(
            total = self.store.len(),
            matched = self.view.len(),
            filters_enabled = self.filters_enabled,
            selection_in_view,
            "view refreshed"
        );
    }
}
