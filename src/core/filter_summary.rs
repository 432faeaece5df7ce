use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::filter::{FilterCriteria, FilterDimension, RangeInput};
use crate::core::primitives::format_currency;

/// Compact label describing one active filter dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterBadge {
    pub dimension: FilterDimension,
    pub text: String,
}

impl FilterCriteria {
    /// Builds one badge per dimension that has a bound set, in form order.
    ///
    /// Prices are rendered as currency; a price that is not a number is shown
    /// verbatim.
    #[must_use]
    pub fn summary(&self) -> SmallVec<[FilterBadge; 4]> {
        FilterDimension::ALL
            .iter()
            .filter_map(|&dimension| {
                badge_text(dimension, self.range(dimension))
                    .map(|text| FilterBadge { dimension, text })
            })
            .collect()
    }
}

fn badge_prefix(dimension: FilterDimension) -> &'static str {
    match dimension {
        FilterDimension::SquareFeet => "sqft",
        FilterDimension::Bedrooms => "BR",
        FilterDimension::Bathrooms => "BA",
        FilterDimension::Price => "Price",
    }
}

fn badge_text(dimension: FilterDimension, range: &RangeInput) -> Option<String> {
    let render = |raw: &str| -> String {
        let raw = raw.trim();
        match dimension {
            FilterDimension::Price => format_currency(raw).unwrap_or_else(|| raw.to_owned()),
            _ => raw.to_owned(),
        }
    };
    let min = non_blank(range.min.as_deref()).map(&render);
    let max = non_blank(range.max.as_deref()).map(&render);

    let prefix = badge_prefix(dimension);
    match (min, max) {
        (None, None) => None,
        (Some(min), None) => Some(format!("{prefix}: min {min}")),
        (None, Some(max)) => Some(format!("{prefix}: max {max}")),
        (Some(min), Some(max)) => Some(format!("{prefix}: min {min} max {max}")),
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.filter(|text| !text.trim().is_empty())
}
