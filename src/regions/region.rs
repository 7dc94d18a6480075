use anyhow::{Result, ensure};
use float_cmp::approx_eq;
use itertools::Itertools;
use log::warn;

use crate::geometry::enclosing_circle;
use crate::geometry::primitives::{GeoCircle, GeoPoint};
use crate::regions::MonitoredCircle;
use crate::util::assertions;

/// Describes a geographic region to monitor for enter/exit notifications.
///
/// Platform monitoring services only track circles: a [`RegionDescriptor::Circle`]
/// is monitored directly, while a [`RegionDescriptor::Polygon`] is monitored through
/// the smallest circle enclosing its vertices.
///
/// Descriptors are immutable apart from the two notify flags. They are owned by a
/// single monitoring request; mutation requires `&mut` access, so unsynchronized
/// concurrent mutation is ruled out at compile time.
#[derive(Clone, Debug, PartialEq)]
pub enum RegionDescriptor {
    /// Circular region, monitored as-is
    Circle(MonitoredCircle),
    /// Polygonal region, monitored through the circle enclosing all its vertices
    Polygon {
        /// Vertices of the polygon boundary, in order
        vertices: Vec<GeoPoint>,
        /// Circle enclosing all vertices, registered with the monitoring service
        bounding: MonitoredCircle,
    },
}

impl RegionDescriptor {
    /// Creates a circular region with a freshly generated identifier.
    /// Both notification flags start enabled.
    pub fn from_circle(center: GeoPoint, radius: f64) -> Result<Self> {
        ensure!(
            radius.is_finite() && radius >= 0.0,
            "invalid region radius: {radius}"
        );
        ensure!(center.in_bounds(), "region center out of bounds: {center:?}");

        Ok(RegionDescriptor::Circle(MonitoredCircle::new(
            GeoCircle::new(center, radius),
        )))
    }

    /// Creates a polygonal region with a freshly generated identifier.
    /// Both notification flags start enabled.
    ///
    /// The smallest circle enclosing all vertices is computed here and becomes
    /// the circle registered with the monitoring service.
    pub fn from_polygon(mut vertices: Vec<GeoPoint>) -> Result<Self> {
        //Strip the last vertex if it is the same as the first one
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        eliminate_degenerate_vertices(&mut vertices);
        ensure!(
            vertices.len() >= 3,
            "polygon requires at least 3 distinct vertices, got {}",
            vertices.len()
        );
        ensure!(
            vertices.iter().unique().count() == vertices.len(),
            "polygon has non-consecutive duplicate vertices"
        );
        ensure!(
            vertices.iter().all(|v| v.in_bounds()),
            "polygon vertex out of bounds: {vertices:?}"
        );

        let bounding = MonitoredCircle::new(enclosing_circle(&vertices));
        debug_assert!(assertions::circle_encloses_vertices(
            &bounding.circle,
            &vertices
        ));

        Ok(RegionDescriptor::Polygon { vertices, bounding })
    }

    /// The circle actually registered with the monitoring service:
    /// the region itself for circles, the enclosing circle for polygons.
    pub fn monitored_circle(&self) -> &MonitoredCircle {
        match self {
            RegionDescriptor::Circle(mc) => mc,
            RegionDescriptor::Polygon { bounding, .. } => bounding,
        }
    }

    fn monitored_circle_mut(&mut self) -> &mut MonitoredCircle {
        match self {
            RegionDescriptor::Circle(mc) => mc,
            RegionDescriptor::Polygon { bounding, .. } => bounding,
        }
    }

    /// Vertices of the polygon boundary, present only for polygonal regions.
    pub fn polygon_vertices(&self) -> Option<&[GeoPoint]> {
        match self {
            RegionDescriptor::Circle(_) => None,
            RegionDescriptor::Polygon { vertices, .. } => Some(vertices),
        }
    }

    /// Stable unique identifier of the region, shared with the monitoring service.
    pub fn id(&self) -> &str {
        &self.monitored_circle().identifier
    }

    pub fn notify_on_entry(&self) -> bool {
        self.monitored_circle().notify_on_entry
    }

    /// Sets whether crossings into the region should be surfaced.
    /// Visible immediately to subsequent reads and to the monitoring service
    /// once the descriptor is (re-)submitted.
    pub fn set_notify_on_entry(&mut self, notify: bool) {
        self.monitored_circle_mut().notify_on_entry = notify;
    }

    pub fn notify_on_exit(&self) -> bool {
        self.monitored_circle().notify_on_exit
    }

    /// Sets whether crossings out of the region should be surfaced.
    pub fn set_notify_on_exit(&mut self, notify: bool) {
        self.monitored_circle_mut().notify_on_exit = notify;
    }
}

/// Removes vertices that (approximately) coincide with their successor
/// (e.g. [a, b, b, c] -> [a, b, c]).
fn eliminate_degenerate_vertices(vertices: &mut Vec<GeoPoint>) {
    let n_vertices = vertices.len();
    if n_vertices < 2 {
        return;
    }
    let mut indices_to_remove = vec![];
    for i in 0..n_vertices {
        let j = (i + 1) % n_vertices;
        let v_i = vertices[i];
        let v_j = vertices[j];
        if i != j && approx_eq!(f64, v_i.lat, v_j.lat) && approx_eq!(f64, v_i.lon, v_j.lon) {
            //vertices are equal, mark for removal
            indices_to_remove.push(i);
        }
    }
    //remove vertices in reverse order to avoid shifting indices
    indices_to_remove.sort_unstable_by(|a, b| b.cmp(a));
    for index in indices_to_remove {
        warn!(
            "degenerate polygon vertex eliminated (idx: {}, {:?})",
            index, vertices[index]
        );
        vertices.remove(index);
    }
}
