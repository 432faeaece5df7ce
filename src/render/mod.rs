mod frame;
mod null_presenter;

pub use frame::SessionFrame;
pub use null_presenter::NullPresenter;

pub use crate::core::{FitBoundsRequest, ScrollTarget};

use crate::error::MapViewResult;

/// Contract implemented by the host's map and list widgets.
///
/// Presenters receive a fully materialized `SessionFrame` so drawing code
/// stays isolated from filtering, windowing and selection logic. Camera and
/// scroll requests arrive as separate calls after the frame is rendered.
pub trait Presenter {
    fn render(&mut self, frame: &SessionFrame) -> MapViewResult<()>;

    /// Recenters the map on `request.bounds` with the given padding and
    /// animation duration.
    fn fit_bounds(&mut self, request: FitBoundsRequest) -> MapViewResult<()>;

    /// Scrolls the list row for `record_id` into view.
    fn scroll_into_view(&mut self, record_id: &str) -> MapViewResult<()>;
}
