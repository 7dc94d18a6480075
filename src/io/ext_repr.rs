use serde::{Deserialize, Serialize};

use crate::geometry::primitives::GeoPoint;

/// Discriminator value for circular regions
pub const KIND_CIRCLE: u8 = 0;
/// Discriminator value for polygonal regions
pub const KIND_POLYGON: u8 = 1;

/// External representation of a [`RegionDescriptor`](crate::regions::RegionDescriptor).
/// Field names are stable, persisted data depends on them.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtRegion {
    /// Discriminator: 0 = circle, 1 = polygon
    pub kind: u8,
    /// Center of the monitored circle
    #[serde(rename = "cRegionCenter")]
    pub center: ExtGeoPoint,
    /// Radius of the monitored circle, in meters
    #[serde(rename = "clRegionRadius")]
    pub radius: f64,
    /// Unique identifier of the monitored circle
    pub identifier: String,
    /// Vertices of the polygon boundary. Only present for polygonal regions
    #[serde(
        rename = "polygonCoordinates",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub polygon_coordinates: Option<Vec<ExtGeoPoint>>,
    /// Whether crossings into the region should be surfaced
    #[serde(rename = "notifyOnEntry")]
    pub notify_on_entry: bool,
    /// Whether crossings out of the region should be surfaced
    #[serde(rename = "notifyOnExit")]
    pub notify_on_exit: bool,
}

/// External representation of a [`GeoPoint`](crate::geometry::primitives::GeoPoint)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtGeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl From<GeoPoint> for ExtGeoPoint {
    fn from(p: GeoPoint) -> Self {
        ExtGeoPoint { lat: p.lat, lon: p.lon }
    }
}

impl From<ExtGeoPoint> for GeoPoint {
    fn from(p: ExtGeoPoint) -> Self {
        GeoPoint { lat: p.lat, lon: p.lon }
    }
}
