use std::sync::Arc;

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::Record;

/// Geographic point in degrees. Either coordinate is `NaN` when the source
/// row was malformed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    #[must_use]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self::new(record.longitude_value(), record.latitude_value())
    }

    /// `[longitude, latitude]`, the GeoJSON coordinate order.
    #[must_use]
    pub fn coordinates(self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// Renderers must skip points that are not plottable.
    #[must_use]
    pub fn is_plottable(self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }
}

/// Axis-aligned `[min_lng, min_lat, max_lng, max_lat]` rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_longitude: f64,
    pub min_latitude: f64,
    pub max_longitude: f64,
    pub max_latitude: f64,
}

impl BoundingBox {
    /// Map max-bounds covering Vancouver and the Lower Mainland.
    pub const LOWER_MAINLAND: Self = Self {
        min_longitude: -123.6,
        min_latitude: 49.0,
        max_longitude: -121.8,
        max_latitude: 49.6,
    };

    #[must_use]
    pub fn new(
        min_longitude: f64,
        min_latitude: f64,
        max_longitude: f64,
        max_latitude: f64,
    ) -> Self {
        Self {
            min_longitude,
            min_latitude,
            max_longitude,
            max_latitude,
        }
    }

    /// Degenerate box enclosing a single point.
    #[must_use]
    pub fn around_point(point: GeoPoint) -> Self {
        Self::new(
            point.longitude,
            point.latitude,
            point.longitude,
            point.latitude,
        )
    }

    /// Smallest box enclosing every plottable point; `None` when there is none.
    #[must_use]
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        points
            .into_iter()
            .filter(|point| point.is_plottable())
            .fold(None, |acc: Option<Self>, point| {
                Some(match acc {
                    None => Self::around_point(point),
                    Some(bounds) => Self::new(
                        bounds.min_longitude.min(point.longitude),
                        bounds.min_latitude.min(point.latitude),
                        bounds.max_longitude.max(point.longitude),
                        bounds.max_latitude.max(point.latitude),
                    ),
                })
            })
    }

    #[must_use]
    pub fn contains(self, point: GeoPoint) -> bool {
        point.longitude >= self.min_longitude
            && point.longitude <= self.max_longitude
            && point.latitude >= self.min_latitude
            && point.latitude <= self.max_latitude
    }

    #[must_use]
    pub fn as_array(self) -> [f64; 4] {
        [
            self.min_longitude,
            self.min_latitude,
            self.max_longitude,
            self.max_latitude,
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryKind {
    #[default]
    Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: GeometryKind,
    pub coordinates: [f64; 2],
}

impl PointGeometry {
    #[must_use]
    pub fn point(self) -> GeoPoint {
        GeoPoint::new(self.coordinates[0], self.coordinates[1])
    }
}

/// Record attributes plus the derived selection flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    #[serde(flatten)]
    pub record: Record,
    #[serde(rename = "isSelected")]
    pub is_selected: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureKind {
    #[default]
    Feature,
}

/// Point feature consumed by the map renderer, one per record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoFeature {
    #[serde(rename = "type")]
    pub kind: FeatureKind,
    pub geometry: PointGeometry,
    pub properties: FeatureProperties,
}

impl GeoFeature {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.properties.record.id
    }

    #[must_use]
    pub fn point(&self) -> GeoPoint {
        self.geometry.point()
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.properties.is_selected
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectionKind {
    #[default]
    FeatureCollection,
}

/// Ordered point collection; serializes as a GeoJSON `FeatureCollection`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoCollection {
    #[serde(rename = "type")]
    pub kind: CollectionKind,
    pub features: Vec<GeoFeature>,
}

impl GeoCollection {
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&GeoFeature> {
        self.features.iter().find(|feature| feature.id() == id)
    }

    pub fn selected(&self) -> impl Iterator<Item = &GeoFeature> + '_ {
        self.features.iter().filter(|feature| feature.is_selected())
    }

    #[must_use]
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::enclosing(self.features.iter().map(GeoFeature::point))
    }
}

/// Projects records into point features, preserving order and tagging the
/// record whose id equals `selected_id`.
///
/// Unparsable coordinates become `NaN` and the feature is still emitted.
#[must_use]
pub fn project(records: &[Arc<Record>], selected_id: Option<&str>) -> GeoCollection {
    #[cfg(feature = "parallel-projection")]
    let features: Vec<GeoFeature> = records
        .par_iter()
        .map(|record| project_single_record(record, selected_id))
        .collect();

    #[cfg(not(feature = "parallel-projection"))]
    let features: Vec<GeoFeature> = records
        .iter()
        .map(|record| project_single_record(record, selected_id))
        .collect();

    GeoCollection {
        kind: CollectionKind::FeatureCollection,
        features,
    }
}

fn project_single_record(record: &Record, selected_id: Option<&str>) -> GeoFeature {
    let point = GeoPoint::from_record(record);
    GeoFeature {
        kind: FeatureKind::Feature,
        geometry: PointGeometry {
            kind: GeometryKind::Point,
            coordinates: point.coordinates(),
        },
        properties: FeatureProperties {
            record: record.clone(),
            is_selected: selected_id == Some(record.id.as_str()),
        },
    }
}
