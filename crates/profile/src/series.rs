use foundation::units::LinearUnit;
use geometry::Polyline;

use crate::extract::{ProfilePoint, distance_along, extract_profile};

/// Fixed series names consumed by the chart collaborator.
pub const SERIES_BEFORE: &str = "before";
pub const SERIES_AFTER: &str = "after";

/// How far the flat baseline extends on the distance axis.
const BASELINE_EXTENT: f64 = 100.0;

/// The profile of one elevation surface along the sketched path.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSeries {
    points: Vec<ProfilePoint>,
}

impl ProfileSeries {
    pub fn from_points(points: Vec<ProfilePoint>) -> Self {
        Self { points }
    }

    /// The fixed two-point flat series shown when no sketch is active.
    ///
    /// A sentinel "empty", not an error: the chart always has something to
    /// draw.
    pub fn baseline() -> Self {
        Self {
            points: vec![
                ProfilePoint {
                    distance: 0.0,
                    elevation: 0.0,
                    index: 0,
                },
                ProfilePoint {
                    distance: BASELINE_EXTENT,
                    elevation: 0.0,
                    index: 1,
                },
            ],
        }
    }

    /// Runs the full extraction for one surface's polyline.
    pub fn from_polyline(polyline: &Polyline, unit: LinearUnit) -> Self {
        Self {
            points: extract_profile(&distance_along(polyline, unit)),
        }
    }

    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Elevation difference between the two surfaces at one aligned sample.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ElevationDifference {
    pub distance: f64,
    pub before: f64,
    pub after: f64,
    /// `after - before`; negative where material was lost.
    pub difference: f64,
}

/// Both surface profiles for the current sketch, aligned by sample index.
///
/// This is the explicit state handed to the rendering collaborator; nothing
/// here is captured in UI closures.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPair {
    pub before: ProfileSeries,
    pub after: ProfileSeries,
}

impl SeriesPair {
    pub fn baseline() -> Self {
        Self {
            before: ProfileSeries::baseline(),
            after: ProfileSeries::baseline(),
        }
    }

    /// Elevation difference at the aligned sample nearest to `distance`.
    ///
    /// Both series are extracted from the same densified path, so sample i
    /// of one corresponds to sample i of the other. Distance is
    /// non-decreasing along the before series, which makes the nearest
    /// lookup a binary search. Ties prefer the earlier sample.
    pub fn difference_at(&self, distance: f64) -> Option<ElevationDifference> {
        let idx = nearest_index_by_distance(self.before.points(), distance)?;
        let before = self.before.points().get(idx)?;
        let after = self.after.points().get(idx)?;
        Some(ElevationDifference {
            distance: before.distance,
            before: before.elevation,
            after: after.elevation,
            difference: after.elevation - before.elevation,
        })
    }
}

fn nearest_index_by_distance(points: &[ProfilePoint], distance: f64) -> Option<usize> {
    if points.is_empty() {
        return None;
    }
    let upper = points.partition_point(|p| p.distance < distance);
    if upper == 0 {
        return Some(0);
    }
    if upper >= points.len() {
        return Some(points.len() - 1);
    }
    let below = distance - points[upper - 1].distance;
    let above = points[upper].distance - distance;
    Some(if below <= above { upper - 1 } else { upper })
}

/// Recomputes both profiles: with both inputs present the extraction runs
/// per surface; otherwise both series reset to the flat baseline.
///
/// Pure and idempotent; the only side effects live at the chart boundary.
pub fn update_profile(
    before: Option<&Polyline>,
    after: Option<&Polyline>,
    unit: LinearUnit,
) -> SeriesPair {
    match (before, after) {
        (Some(before), Some(after)) => SeriesPair {
            before: ProfileSeries::from_polyline(before, unit),
            after: ProfileSeries::from_polyline(after, unit),
        },
        _ => SeriesPair::baseline(),
    }
}
