use std::sync::Arc;

use tracing::trace;

use crate::core::{FilterCriteria, GeoCollection, PageInfo, Record, WindowRange};
use crate::error::MapViewResult;
use crate::extensions::{SessionEvent, SessionObserver};
use crate::render::{Presenter, SessionFrame};

use super::{SessionCommand, SessionConfig, SessionState, SessionUpdate};

/// Main orchestration facade consumed by host applications.
///
/// `MapSession` feeds commands through [`SessionState::reduce`], then pushes
/// the resulting frame and any camera/scroll requests to the presenter.
pub struct MapSession<P: Presenter> {
    pub(super) presenter: P,
    pub(super) state: SessionState,
    pub(super) observers: Vec<Box<dyn SessionObserver>>,
}

impl<P: Presenter> MapSession<P> {
    /// Builds a session over a freshly loaded dataset.
    pub fn new(presenter: P, records: Vec<Record>, config: SessionConfig) -> MapViewResult<Self> {
        let state = SessionState::new(records, config)?;
        Ok(Self::from_state(presenter, state))
    }

    #[must_use]
    pub fn from_state(presenter: P, state: SessionState) -> Self {
        Self {
            presenter,
            state,
            observers: Vec::new(),
        }
    }

    /// Reduces `command` and propagates its side effects.
    ///
    /// Order: state update, observer events, frame render, map camera move,
    /// list scroll. Rejected filters and no-ops render nothing.
    pub fn dispatch(&mut self, command: SessionCommand) -> MapViewResult<SessionUpdate> {
        let is_select = matches!(command, SessionCommand::Select(_));
        trace!(?command, "dispatch session command");
        let update = self.state.reduce(command);
        self.emit_update_events(&update);

        if !update.changes_state() {
            return Ok(update);
        }
        self.render()?;

        if let SessionUpdate::SelectionChanged {
            selected_id: Some(_),
            ..
        } = &update
        {
            if let Some(request) = self.state.fit_bounds_request() {
                self.presenter.fit_bounds(request)?;
            }
        }
        if is_select {
            if let Some(target) = self.state.scroll_target() {
                self.presenter.scroll_into_view(&target.record_id)?;
            }
        }
        Ok(update)
    }

    pub fn select(&mut self, id: &str) -> MapViewResult<SessionUpdate> {
        self.dispatch(SessionCommand::Select(id.to_owned()))
    }

    pub fn clear_selection(&mut self) -> MapViewResult<SessionUpdate> {
        self.dispatch(SessionCommand::ClearSelection)
    }

    pub fn page_forward(&mut self) -> MapViewResult<SessionUpdate> {
        self.dispatch(SessionCommand::PageForward)
    }

    pub fn page_backward(&mut self) -> MapViewResult<SessionUpdate> {
        self.dispatch(SessionCommand::PageBackward)
    }

    pub fn apply_filters(&mut self, criteria: FilterCriteria) -> MapViewResult<SessionUpdate> {
        self.dispatch(SessionCommand::ApplyFilters(criteria))
    }

    pub fn clear_filters(&mut self) -> MapViewResult<SessionUpdate> {
        self.dispatch(SessionCommand::ClearFilters)
    }

    pub fn set_filters_enabled(&mut self, enabled: bool) -> MapViewResult<SessionUpdate> {
        self.dispatch(SessionCommand::SetFiltersEnabled(enabled))
    }

    /// Builds and presents the frame for the current state.
    pub fn render(&mut self) -> MapViewResult<()> {
        let frame = self.frame();
        self.presenter.render(&frame)?;
        self.emit_event(SessionEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn frame(&self) -> SessionFrame {
        let state = &self.state;
        let config = state.config();
        SessionFrame {
            features: state.geo_collection(),
            visible: state.visible_records().to_vec(),
            window: state.window_range(),
            page: state.page_info(),
            total_records: state.store().len(),
            matched_records: state.view().len(),
            max_visible_count: config.max_visible_count,
            selected_id: state.selected_id().map(str::to_owned),
            active_filters: state
                .active_criteria()
                .filter(|_| state.filters_enabled())
                .map(|criteria| criteria.summary().into_vec())
                .unwrap_or_default(),
            map_max_bounds: config.map_max_bounds,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn visible_records(&self) -> &[Arc<Record>] {
        self.state.visible_records()
    }

    #[must_use]
    pub fn window_range(&self) -> Option<WindowRange> {
        self.state.window_range()
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.state.selected_id()
    }

    #[must_use]
    pub fn page_info(&self) -> PageInfo {
        self.state.page_info()
    }

    #[must_use]
    pub fn geo_collection(&self) -> GeoCollection {
        self.state.geo_collection()
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    #[must_use]
    pub fn into_presenter(self) -> P {
        self.presenter
    }
}
