use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::Record;

/// Canonical, immutable collection of every loaded record.
///
/// Insertion order is preserved and drives the order of every derived view.
/// Identifier lookups resolve to the first record carrying that id.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Arc<Record>>,
    positions: IndexMap<String, usize>,
}

impl RecordStore {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        let mut positions = IndexMap::with_capacity(records.len());
        let mut duplicate_count = 0_usize;
        for (index, record) in records.iter().enumerate() {
            if positions.contains_key(&record.id) {
                duplicate_count += 1;
                continue;
            }
            positions.insert(record.id.clone(), index);
        }
        if duplicate_count > 0 {
            warn!(
                duplicate_count,
                "record store contains duplicate ids; lookups resolve to the first occurrence"
            );
        }

        let records: Vec<Arc<Record>> = records.into_iter().map(Arc::new).collect();
        debug!(count = records.len(), "record store loaded");
        Self { records, positions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[Arc<Record>] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<Record>> {
        self.positions
            .get(id)
            .and_then(|&index| self.records.get(index))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Unfiltered view over every record, used when filtering is off.
    #[must_use]
    pub fn full_view(&self) -> FilteredView {
        FilteredView::new(self.records.clone())
    }
}

/// Ordered subset of the store passing the active filter.
///
/// A view is rebuilt whenever the filter changes; it is never edited in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredView {
    records: Vec<Arc<Record>>,
}

impl FilteredView {
    #[must_use]
    pub fn new(records: Vec<Arc<Record>>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[Arc<Record>] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Arc<Record>> {
        self.records.get(index)
    }

    /// Index of the first record with `id`, scanning in view order.
    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.position_of(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|record| record.id.as_str())
    }
}
