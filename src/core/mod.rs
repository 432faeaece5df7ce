pub mod filter;
pub mod filter_summary;
pub mod geo;
pub mod loader;
pub mod primitives;
pub mod record;
pub mod selection;
pub mod store;
pub mod window;

pub use filter::{
    BoundErrors, BoundInput, FilterCriteria, FilterDimension, FilterErrors, FilterValidation,
    RangeInput,
};
pub use filter_summary::FilterBadge;
pub use geo::{BoundingBox, GeoCollection, GeoFeature, GeoPoint, project};
pub use loader::{load_records, load_records_from_path, load_records_from_str};
pub use record::Record;
pub use selection::{FitBoundsRequest, ScrollTarget, SelectionCoordinator};
pub use store::{FilteredView, RecordStore};
pub use window::{PageInfo, SlidingWindow, WindowConfig, WindowRange, current_page, page_count};
