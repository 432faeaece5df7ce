use crate::extensions::{ObserverContext, SessionEvent};
use crate::render::Presenter;

use super::{MapSession, SessionUpdate};

impl<P: Presenter> MapSession<P> {
    pub(super) fn observer_context(&self) -> ObserverContext {
        ObserverContext {
            total_records: self.state.store().len(),
            matched_records: self.state.view().len(),
            filters_enabled: self.state.filters_enabled(),
            window: self.state.window_range(),
            selected_id: self.state.selected_id().map(str::to_owned),
        }
    }

    pub(super) fn emit_event(&mut self, event: SessionEvent) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.observer_context();
        for observer in &mut self.observers {
            observer.on_event(&event, &context);
        }
    }

    pub(super) fn emit_update_events(&mut self, update: &SessionUpdate) {
        match update {
            SessionUpdate::Unchanged => {}
            SessionUpdate::WindowMoved { window } => {
                self.emit_event(SessionEvent::WindowChanged {
                    window: Some(*window),
                });
            }
            SessionUpdate::SelectionChanged {
                selected_id,
                window_moved,
            } => {
                self.emit_event(SessionEvent::SelectionChanged {
                    selected_id: selected_id.clone(),
                });
                if *window_moved {
                    let window = self.state.window_range();
                    self.emit_event(SessionEvent::WindowChanged { window });
                }
            }
            SessionUpdate::FiltersRejected { validation } => {
                self.emit_event(SessionEvent::FiltersRejected {
                    error_count: validation.errors.count(),
                });
            }
            SessionUpdate::FiltersApplied { matched_records }
            | SessionUpdate::FiltersCleared { matched_records }
            | SessionUpdate::FiltersToggled {
                matched_records, ..
            } => {
                self.emit_event(SessionEvent::ViewReplaced {
                    matched_records: *matched_records,
                });
                let window = self.state.window_range();
                self.emit_event(SessionEvent::WindowChanged { window });
            }
        }
    }
}
