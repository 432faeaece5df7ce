use crate::core::{FitBoundsRequest, WindowRange};
use crate::error::MapViewResult;
use crate::render::{Presenter, SessionFrame};

/// No-op presenter used by tests and headless sessions.
///
/// It still validates every frame so tests catch broken window invariants,
/// and remembers the last side-effect requests it received.
#[derive(Debug, Default)]
pub struct NullPresenter {
    pub frames_rendered: usize,
    pub last_feature_count: usize,
    pub last_visible_ids: Vec<String>,
    pub last_window: Option<WindowRange>,
    pub fit_bounds_requests: usize,
    pub last_fit_bounds: Option<FitBoundsRequest>,
    pub scrolled_ids: Vec<String>,
}

impl Presenter for NullPresenter {
    fn render(&mut self, frame: &SessionFrame) -> MapViewResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_feature_count = frame.features.len();
        self.last_visible_ids = frame
            .visible
            .iter()
            .map(|record| record.id.clone())
            .collect();
        self.last_window = frame.window;
        Ok(())
    }

    fn fit_bounds(&mut self, request: FitBoundsRequest) -> MapViewResult<()> {
        self.fit_bounds_requests += 1;
        self.last_fit_bounds = Some(request);
        Ok(())
    }

    fn scroll_into_view(&mut self, record_id: &str) -> MapViewResult<()> {
        self.scrolled_ids.push(record_id.to_owned());
        Ok(())
    }
}
