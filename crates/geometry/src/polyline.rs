use foundation::math::Vec3;

/// One vertex of a sketched path.
///
/// `z` carries elevation once a surface has been queried (0.0 until then);
/// `m` is the derived distance-along measure and stays `None` until the
/// profile pass assigns it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PathVertex {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub m: Option<f64>,
}

impl PathVertex {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, m: None }
    }

    pub fn with_m(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z,
            m: Some(m),
        }
    }

    pub fn position(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl From<Vec3> for PathVertex {
    fn from(p: Vec3) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

/// An ordered vertex chain; vertex order is traversal order along the sketch.
pub type Part = Vec<PathVertex>;

/// Ordered collection of parts describing a path in planar map units.
///
/// Parts preserve insertion order. An empty polyline (or one made only of
/// empty parts) is valid and simply contributes nothing downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    pub parts: Vec<Part>,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-part polyline from planar (x, y) pairs; z defaults to 0.0.
    pub fn from_xy(points: &[(f64, f64)]) -> Self {
        let part = points
            .iter()
            .map(|&(x, y)| PathVertex::new(x, y, 0.0))
            .collect();
        Self { parts: vec![part] }
    }

    /// Single-part polyline from (x, y, z) triples.
    pub fn from_xyz(points: &[(f64, f64, f64)]) -> Self {
        let part = points
            .iter()
            .map(|&(x, y, z)| PathVertex::new(x, y, z))
            .collect();
        Self { parts: vec![part] }
    }

    pub fn push_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    pub fn vertex_count(&self) -> usize {
        self.parts.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// All vertices in traversal order (parts in insertion order).
    pub fn vertices(&self) -> impl Iterator<Item = &PathVertex> {
        self.parts.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::{PathVertex, Polyline};

    #[test]
    fn from_xy_defaults_z_to_zero() {
        let line = Polyline::from_xy(&[(0.0, 0.0), (5.0, 5.0)]);
        assert_eq!(line.parts.len(), 1);
        assert!(line.vertices().all(|v| v.z == 0.0 && v.m.is_none()));
    }

    #[test]
    fn vertex_count_spans_parts() {
        let mut line = Polyline::from_xyz(&[(0.0, 0.0, 1.0), (1.0, 0.0, 2.0)]);
        line.push_part(vec![PathVertex::new(5.0, 5.0, 3.0)]);
        line.push_part(Vec::new());
        assert_eq!(line.vertex_count(), 3);
        assert!(!line.is_empty());
    }

    #[test]
    fn vertices_iterate_in_traversal_order() {
        let mut line = Polyline::from_xy(&[(0.0, 0.0), (1.0, 0.0)]);
        line.push_part(vec![PathVertex::new(2.0, 0.0, 0.0)]);
        let xs: Vec<f64> = line.vertices().map(|v| v.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn empty_polyline_is_empty() {
        let mut line = Polyline::new();
        assert!(line.is_empty());
        line.push_part(Vec::new());
        assert!(line.is_empty());
    }
}
