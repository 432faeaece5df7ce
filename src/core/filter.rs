use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::primitives::parse_finite;
use crate::core::{FilteredView, Record};

/// Bedroom counts offered by the filter form.
pub const BEDROOM_OPTIONS: [u32; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
/// Bathroom counts offered by the filter form. Bathrooms start from 1.
pub const BATHROOM_OPTIONS: [u32; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

pub const DEFAULT_MIN_SQUARE_FEET: u32 = 0;
pub const DEFAULT_MAX_SQUARE_FEET: u32 = 3_000;
pub const DEFAULT_MIN_BEDROOMS: u32 = 0;
pub const DEFAULT_MAX_BEDROOMS: u32 = 0;
pub const DEFAULT_MIN_BATHROOMS: u32 = 1;
pub const DEFAULT_MAX_BATHROOMS: u32 = 1;
pub const DEFAULT_MIN_PRICE: u32 = 50_000;
pub const DEFAULT_MAX_PRICE: u32 = 5_000_000;

/// One of the four numeric dimensions a record can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterDimension {
    SquareFeet,
    Bedrooms,
    Bathrooms,
    Price,
}

impl FilterDimension {
    pub const ALL: [Self; 4] = [Self::SquareFeet, Self::Bedrooms, Self::Bathrooms, Self::Price];

    /// Human-readable name used inside validation messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SquareFeet => "square feet",
            Self::Bedrooms => "bedrooms",
            Self::Bathrooms => "bathrooms",
            Self::Price => "price",
        }
    }

    /// Smallest accepted bound and the message shown below it.
    ///
    /// Room counts come from fixed option lists and carry no floor.
    fn floor(self) -> Option<(f64, &'static str)> {
        match self {
            Self::SquareFeet => Some((1.0, "cannot be negative or less than 1.")),
            Self::Price => Some((1.0, "cannot be a negative number or 0.")),
            Self::Bedrooms | Self::Bathrooms => None,
        }
    }

    fn record_value(self, record: &Record) -> Option<f64> {
        match self {
            Self::SquareFeet => record.area_sqft_value(),
            Self::Bedrooms => record.bedroom_count().map(f64::from),
            Self::Bathrooms => record.bathroom_count().map(f64::from),
            Self::Price => record.price_value(),
        }
    }
}

/// Raw form input for one inclusive range. `None` or blank means unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeInput {
    #[serde(default)]
    pub min: Option<String>,
    #[serde(default)]
    pub max: Option<String>,
}

impl RangeInput {
    #[must_use]
    pub fn new(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            min: Some(min.into()),
            max: Some(max.into()),
        }
    }

    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn at_least(min: impl Into<String>) -> Self {
        Self {
            min: Some(min.into()),
            max: None,
        }
    }

    #[must_use]
    pub fn at_most(max: impl Into<String>) -> Self {
        Self {
            min: None,
            max: Some(max.into()),
        }
    }

    #[must_use]
    pub fn min_bound(&self) -> BoundInput {
        BoundInput::parse(self.min.as_deref())
    }

    #[must_use]
    pub fn max_bound(&self) -> BoundInput {
        BoundInput::parse(self.max.as_deref())
    }

    /// True when at least one side carries non-blank input.
    #[must_use]
    pub fn is_constrained(&self) -> bool {
        !matches!(
            (self.min_bound(), self.max_bound()),
            (BoundInput::Unset, BoundInput::Unset)
        )
    }
}

/// Parsed state of a single bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundInput {
    Unset,
    Value(f64),
    Invalid,
}

impl BoundInput {
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Unset,
            Some(text) if text.trim().is_empty() => Self::Unset,
            Some(text) => parse_finite(text).map_or(Self::Invalid, Self::Value),
        }
    }

    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(value),
            Self::Unset | Self::Invalid => None,
        }
    }
}

/// Four inclusive range predicates collected by the filter form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub square_feet: RangeInput,
    #[serde(default)]
    pub bedrooms: RangeInput,
    #[serde(default)]
    pub bathrooms: RangeInput,
    #[serde(default)]
    pub price: RangeInput,
}

impl FilterCriteria {
    /// Values the filter form starts with.
    #[must_use]
    pub fn form_defaults() -> Self {
        Self {
            square_feet: RangeInput::new(
                DEFAULT_MIN_SQUARE_FEET.to_string(),
                DEFAULT_MAX_SQUARE_FEET.to_string(),
            ),
            bedrooms: RangeInput::new(
                DEFAULT_MIN_BEDROOMS.to_string(),
                DEFAULT_MAX_BEDROOMS.to_string(),
            ),
            bathrooms: RangeInput::new(
                DEFAULT_MIN_BATHROOMS.to_string(),
                DEFAULT_MAX_BATHROOMS.to_string(),
            ),
            price: RangeInput::new(
                DEFAULT_MIN_PRICE.to_string(),
                DEFAULT_MAX_PRICE.to_string(),
            ),
        }
    }

    #[must_use]
    pub fn with_range(mut self, dimension: FilterDimension, range: RangeInput) -> Self {
        *self.range_mut(dimension) = range;
        self
    }

    #[must_use]
    pub fn range(&self, dimension: FilterDimension) -> &RangeInput {
        match dimension {
            FilterDimension::SquareFeet => &self.square_feet,
            FilterDimension::Bedrooms => &self.bedrooms,
            FilterDimension::Bathrooms => &self.bathrooms,
            FilterDimension::Price => &self.price,
        }
    }

    fn range_mut(&mut self, dimension: FilterDimension) -> &mut RangeInput {
        match dimension {
            FilterDimension::SquareFeet => &mut self.square_feet,
            FilterDimension::Bedrooms => &mut self.bedrooms,
            FilterDimension::Bathrooms => &mut self.bathrooms,
            FilterDimension::Price => &mut self.price,
        }
    }

    /// True when no dimension carries any bound.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        FilterDimension::ALL
            .iter()
            .all(|&dimension| !self.range(dimension).is_constrained())
    }
}

/// Validation messages for the min and max field of one dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundErrors {
    pub min: Option<String>,
    pub max: Option<String>,
}

impl BoundErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterErrors {
    pub square_feet: BoundErrors,
    pub bedrooms: BoundErrors,
    pub bathrooms: BoundErrors,
    pub price: BoundErrors,
}

impl FilterErrors {
    #[must_use]
    pub fn get(&self, dimension: FilterDimension) -> &BoundErrors {
        match dimension {
            FilterDimension::SquareFeet => &self.square_feet,
            FilterDimension::Bedrooms => &self.bedrooms,
            FilterDimension::Bathrooms => &self.bathrooms,
            FilterDimension::Price => &self.price,
        }
    }

    fn get_mut(&mut self, dimension: FilterDimension) -> &mut BoundErrors {
        match dimension {
            FilterDimension::SquareFeet => &mut self.square_feet,
            FilterDimension::Bedrooms => &mut self.bedrooms,
            FilterDimension::Bathrooms => &mut self.bathrooms,
            FilterDimension::Price => &mut self.price,
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        FilterDimension::ALL
            .iter()
            .map(|&dimension| {
                let errors = self.get(dimension);
                usize::from(errors.min.is_some()) + usize::from(errors.max.is_some())
            })
            .sum()
    }
}

/// Result of validating form input. Errors are data for the form, never `Err`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterValidation {
    pub errors: FilterErrors,
    pub is_valid: bool,
}

impl FilterValidation {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.is_valid
    }
}

/// Checks every dimension's bounds and collects per-field messages.
///
/// Rules per dimension:
/// - non-blank input that is not a finite number is rejected
/// - square feet and price bounds below 1 are rejected
/// - when both bounds parse and `min > max`, the max field is rejected
#[must_use]
pub fn validate(criteria: &FilterCriteria) -> FilterValidation {
    let mut errors = FilterErrors::default();

    for dimension in FilterDimension::ALL {
        let range = criteria.range(dimension);
        let label = dimension.label();
        let min = range.min_bound();
        let max = range.max_bound();
        let slot = errors.get_mut(dimension);

        slot.min = bound_error("Min", label, dimension, min);
        slot.max = bound_error("Max", label, dimension, max);

        if let (BoundInput::Value(low), BoundInput::Value(high)) = (min, max) {
            if low > high {
                slot.max = Some(format!("Max {label} must be greater than Min {label}."));
            }
        }
    }

    let is_valid = errors.count() == 0;
    FilterValidation { errors, is_valid }
}

fn bound_error(
    side: &str,
    label: &str,
    dimension: FilterDimension,
    bound: BoundInput,
) -> Option<String> {
    match bound {
        BoundInput::Unset => None,
        BoundInput::Invalid => Some(format!("{side} {label} must be a valid number.")),
        BoundInput::Value(value) => dimension
            .floor()
            .filter(|(floor, _)| value < *floor)
            .map(|(_, message)| format!("{side} {label} {message}")),
    }
}

/// Inclusive numeric bounds for one dimension; `None` sides are open.
#[derive(Debug, Clone, Copy, PartialEq)]
struct NumericRange {
    dimension: FilterDimension,
    min: Option<f64>,
    max: Option<f64>,
}

impl NumericRange {
    fn admits(self, record: &Record) -> bool {
        let Some(value) = self.dimension.record_value(record) else {
            return false;
        };
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

fn numeric_ranges(criteria: &FilterCriteria) -> Vec<NumericRange> {
    FilterDimension::ALL
        .iter()
        .filter_map(|&dimension| {
            let range = criteria.range(dimension);
            let min = range.min_bound().value();
            let max = range.max_bound().value();
            (min.is_some() || max.is_some()).then_some(NumericRange {
                dimension,
                min,
                max,
            })
        })
        .collect()
}

/// Returns `true` when `record` satisfies every constrained dimension.
///
/// Bounds that fail to parse are treated as unset; the form rejects them
/// through [`validate`] before they get here.
#[must_use]
pub fn matches(record: &Record, criteria: &FilterCriteria) -> bool {
    numeric_ranges(criteria)
        .into_iter()
        .all(|range| range.admits(record))
}

/// Filters `records` in order. Records with an unparsable value on a
/// constrained dimension are excluded.
#[must_use]
pub fn apply(records: &[Arc<Record>], criteria: &FilterCriteria) -> FilteredView {
    let ranges = numeric_ranges(criteria);
    let filtered: Vec<Arc<Record>> = records
        .iter()
        .filter(|record| ranges.iter().all(|range| range.admits(record)))
        .cloned()
        .collect();
    debug!(
        input_count = records.len(),
        matched_count = filtered.len(),
        constrained_dimensions = ranges.len(),
        "applied filter criteria"
    );
    FilteredView::new(filtered)
}
