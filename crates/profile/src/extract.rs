use foundation::units::LinearUnit;
use geometry::{PathVertex, Polyline, planar_distance};

/// One sample of a distance-parameterized elevation profile.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProfilePoint {
    /// Cumulative planar distance along the path.
    pub distance: f64,
    /// Vertex z, 0.0 where the source had none.
    pub elevation: f64,
    /// Position of the vertex within its part.
    pub index: usize,
}

/// Assigns each vertex an m value equal to the cumulative planar distance
/// along the path, reported in `unit`.
///
/// Accumulation is strictly over consecutive vertex pairs; the first vertex
/// of the polyline gets m = 0. The accumulator deliberately carries across
/// part boundaries (the first vertex of a later part inherits the running
/// total), matching the shipped tool. Geometry is otherwise unchanged, and
/// the input is never mutated.
pub fn distance_along(polyline: &Polyline, unit: LinearUnit) -> Polyline {
    let mut accumulated = 0.0;
    let mut out = Polyline::new();

    for part in &polyline.parts {
        let mut measured = Vec::with_capacity(part.len());
        for (i, vertex) in part.iter().enumerate() {
            let prev = if i > 0 { part[i - 1] } else { *vertex };
            accumulated += planar_distance(prev, *vertex, unit);
            measured.push(PathVertex::with_m(vertex.x, vertex.y, vertex.z, accumulated));
        }
        out.push_part(measured);
    }

    out
}

/// Emits one `ProfilePoint` per vertex, in traversal order.
///
/// `distance` is the vertex m value, falling back to the positional index
/// within the part when no measure has been assigned. Output length always
/// equals the total vertex count; nothing is dropped or reordered.
pub fn extract_profile(polyline: &Polyline) -> Vec<ProfilePoint> {
    let mut points = Vec::with_capacity(polyline.vertex_count());
    for part in &polyline.parts {
        for (index, vertex) in part.iter().enumerate() {
            points.push(ProfilePoint {
                distance: vertex.m.unwrap_or(index as f64),
                elevation: vertex.z,
                index,
            });
        }
    }
    points
}
