mod geo_circle;
mod geo_point;

#[doc(inline)]
pub use geo_circle::GeoCircle;
#[doc(inline)]
pub use geo_point::GeoPoint;
