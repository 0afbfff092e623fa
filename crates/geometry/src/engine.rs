use foundation::units::LinearUnit;

use crate::polyline::{PathVertex, Polyline};

/// Planar (x, y) distance between two vertices, reported in `unit`.
///
/// Coordinates are projected map units (meters); z never contributes.
pub fn planar_distance(a: PathVertex, b: PathVertex, unit: LinearUnit) -> f64 {
    unit.from_meters(a.position().planar_distance(b.position()))
}

/// Total planar length of a polyline, reported in `unit`.
///
/// Summed over consecutive vertex pairs per part; empty and single-vertex
/// parts contribute nothing. A zero result is the caller's signal to skip
/// densification and elevation queries.
pub fn planar_length(polyline: &Polyline, unit: LinearUnit) -> f64 {
    let mut meters = 0.0;
    for part in &polyline.parts {
        for pair in part.windows(2) {
            meters += pair[0].position().planar_distance(pair[1].position());
        }
    }
    unit.from_meters(meters)
}

/// Returns a polyline in which no segment is planar-longer than
/// `max_segment_len` (in `unit`), inserting evenly spaced vertices where
/// needed.
///
/// Every original vertex is preserved in order; inserted vertices
/// interpolate z linearly. Measures are dropped: distance-along is
/// recomputed downstream over the densified geometry. A non-positive cap
/// returns the input unchanged (minus measures).
pub fn densify(polyline: &Polyline, max_segment_len: f64, unit: LinearUnit) -> Polyline {
    let cap_m = unit.to_meters(max_segment_len);
    let mut out = Polyline::new();

    for part in &polyline.parts {
        let mut dense = Vec::with_capacity(part.len());

        for (i, vertex) in part.iter().enumerate() {
            let stripped = PathVertex::new(vertex.x, vertex.y, vertex.z);
            if i == 0 {
                dense.push(stripped);
                continue;
            }

            let prev = part[i - 1].position();
            let next = vertex.position();
            let seg_m = prev.planar_distance(next);

            if cap_m > 0.0 && seg_m > cap_m {
                let pieces = (seg_m / cap_m).ceil() as usize;
                for k in 1..pieces {
                    let t = k as f64 / pieces as f64;
                    dense.push(PathVertex::from(prev.lerp(next, t)));
                }
            }
            dense.push(stripped);
        }

        out.push_part(dense);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{densify, planar_distance, planar_length};
    use crate::polyline::{PathVertex, Polyline};
    use foundation::units::LinearUnit;

    #[test]
    fn planar_distance_ignores_z_and_converts() {
        let a = PathVertex::new(0.0, 0.0, 500.0);
        let b = PathVertex::new(600.0, 800.0, -500.0);
        assert_eq!(planar_distance(a, b, LinearUnit::Meters), 1_000.0);
        assert_eq!(planar_distance(a, b, LinearUnit::Kilometers), 1.0);
    }

    #[test]
    fn planar_length_sums_across_parts() {
        let mut line = Polyline::from_xy(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        line.push_part(vec![
            PathVertex::new(100.0, 0.0, 0.0),
            PathVertex::new(105.0, 0.0, 0.0),
        ]);
        line.push_part(Vec::new());
        assert_eq!(planar_length(&line, LinearUnit::Meters), 25.0);
    }

    #[test]
    fn zero_length_polyline_reports_zero() {
        let line = Polyline::from_xy(&[(3.0, 3.0), (3.0, 3.0)]);
        assert_eq!(planar_length(&line, LinearUnit::Meters), 0.0);
        assert_eq!(planar_length(&Polyline::new(), LinearUnit::Meters), 0.0);
    }

    #[test]
    fn densify_caps_segment_length() {
        let line = Polyline::from_xy(&[(0.0, 0.0), (100.0, 0.0)]);
        let dense = densify(&line, 30.0, LinearUnit::Meters);

        let part = &dense.parts[0];
        assert_eq!(part.len(), 5); // 4 pieces of 25 m
        for pair in part.windows(2) {
            let d = planar_distance(pair[0], pair[1], LinearUnit::Meters);
            assert!(d <= 30.0 + 1e-9, "segment of {d} m exceeds cap");
        }
        // Endpoints preserved exactly.
        assert_eq!(part[0].x, 0.0);
        assert_eq!(part[4].x, 100.0);
    }

    #[test]
    fn densify_interpolates_z_and_drops_m() {
        let line = Polyline {
            parts: vec![vec![
                PathVertex::with_m(0.0, 0.0, 0.0, 7.0),
                PathVertex::with_m(100.0, 0.0, 40.0, 7.0),
            ]],
        };
        let dense = densify(&line, 50.0, LinearUnit::Meters);
        let part = &dense.parts[0];
        assert_eq!(part.len(), 3);
        assert_eq!(part[1].z, 20.0);
        assert!(part.iter().all(|v| v.m.is_none()));
    }

    #[test]
    fn densify_preserves_original_vertices_in_order() {
        let line = Polyline::from_xy(&[(0.0, 0.0), (40.0, 0.0), (40.0, 90.0)]);
        let dense = densify(&line, 35.0, LinearUnit::Meters);
        let xs_ys: Vec<(f64, f64)> = dense.parts[0].iter().map(|v| (v.x, v.y)).collect();
        for original in [(0.0, 0.0), (40.0, 0.0), (40.0, 90.0)] {
            assert!(xs_ys.contains(&original), "{original:?} missing");
        }
    }

    #[test]
    fn densify_tolerates_degenerate_input() {
        let mut line = Polyline::new();
        line.push_part(Vec::new());
        line.push_part(vec![PathVertex::new(1.0, 1.0, 1.0)]);
        let dense = densify(&line, 10.0, LinearUnit::Meters);
        assert_eq!(dense.parts.len(), 2);
        assert_eq!(dense.vertex_count(), 1);

        // Non-positive cap: geometry passes through unchanged.
        let short = Polyline::from_xy(&[(0.0, 0.0), (5.0, 0.0)]);
        let same = densify(&short, 0.0, LinearUnit::Meters);
        assert_eq!(same.vertex_count(), 2);
    }
}
