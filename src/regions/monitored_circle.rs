use uuid::Uuid;

use crate::geometry::primitives::GeoCircle;

/// The circle registered with the platform monitoring service, regardless of the
/// logical shape of the region it represents.
///
/// Enter/exit events delivered by the service are keyed by `identifier`; the two
/// notify flags decide whether the owning request surfaces them.
#[derive(Clone, Debug, PartialEq)]
pub struct MonitoredCircle {
    pub circle: GeoCircle,
    /// Unique identifier, generated once at construction and stable afterwards
    pub identifier: String,
    /// Whether crossings into the circle should be surfaced
    pub notify_on_entry: bool,
    /// Whether crossings out of the circle should be surfaced
    pub notify_on_exit: bool,
}

impl MonitoredCircle {
    /// Creates a monitored circle with a freshly generated identifier and both
    /// notification flags enabled.
    pub fn new(circle: GeoCircle) -> Self {
        MonitoredCircle {
            circle,
            identifier: Uuid::new_v4().to_string(),
            notify_on_entry: true,
            notify_on_exit: true,
        }
    }
}
