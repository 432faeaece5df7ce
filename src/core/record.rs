use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{parse_count, parse_finite};

/// One resale property row as supplied by the dataset loader.
///
/// Every field stays a string. Numeric parsing happens where a value is used,
/// so a malformed cell only affects the operation that needs it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub area_sqft: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub price: String,
    pub date: String,
    pub address: String,
    pub latitude: String,
    pub longitude: String,
}

impl Record {
    #[must_use]
    pub fn area_sqft_value(&self) -> Option<f64> {
        parse_finite(&self.area_sqft)
    }

    #[must_use]
    pub fn bedroom_count(&self) -> Option<u32> {
        parse_count(&self.bedrooms)
    }

    #[must_use]
    pub fn bathroom_count(&self) -> Option<u32> {
        parse_count(&self.bathrooms)
    }

    #[must_use]
    pub fn price_value(&self) -> Option<f64> {
        parse_finite(&self.price)
    }

    /// Longitude in degrees, `NaN` when the source cell is malformed.
    #[must_use]
    pub fn longitude_value(&self) -> f64 {
        parse_finite(&self.longitude).unwrap_or(f64::NAN)
    }

    /// Latitude in degrees, `NaN` when the source cell is malformed.
    #[must_use]
    pub fn latitude_value(&self) -> f64 {
        parse_finite(&self.latitude).unwrap_or(f64::NAN)
    }

    /// Listing date parsed as `YYYY-MM-DD`.
    #[must_use]
    pub fn listed_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }
}
