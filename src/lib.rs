//! Value types describing geographic regions to monitor (circles and polygons)
//! for enter/exit notifications, plus their stable serialization format.
//!
//! Platform geofencing services typically only track circles. This crate models both
//! circular and polygonal regions, deriving for every polygon the smallest circle
//! enclosing its vertices so either shape can be handed to such a service.
//! Registration, event delivery and monitoring lifecycle are the service's concern,
//! not this crate's.

/// Geodesic primitives and base algorithms
pub mod geometry;

/// Encoding region descriptors into and decoding them out of their persisted form
pub mod io;

/// The region descriptor value types
pub mod regions;

/// Helper functions which do not belong to any specific module
pub mod util;

/// Mean earth radius in meters (IUGG)
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;
