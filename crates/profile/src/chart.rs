use serde::{Deserialize, Serialize};

use crate::series::{SERIES_AFTER, SERIES_BEFORE, SeriesPair};

/// One chart sample: x is distance along the path, y is elevation.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// A named series in the shape the chart collaborator consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPayload {
    pub name: String,
    pub points: Vec<ChartPoint>,
}

/// The rendering collaborator boundary.
///
/// Implementations update their series data and redraw when asked; the
/// profile tool guarantees exactly one `full_render` per update.
pub trait ChartSink {
    fn update_series(&mut self, name: &str, points: &[ChartPoint]);
    fn full_render(&mut self);
}

impl SeriesPair {
    /// Both series keyed by their fixed names, each point a numeric x/y.
    pub fn chart_payload(&self) -> Vec<SeriesPayload> {
        let to_points = |s: &crate::series::ProfileSeries| {
            s.points()
                .iter()
                .map(|p| ChartPoint {
                    x: p.distance,
                    y: p.elevation,
                })
                .collect()
        };
        vec![
            SeriesPayload {
                name: SERIES_BEFORE.to_string(),
                points: to_points(&self.before),
            },
            SeriesPayload {
                name: SERIES_AFTER.to_string(),
                points: to_points(&self.after),
            },
        ]
    }

    /// Pushes both series into `sink`, then requests a single redraw.
    ///
    /// This is the only observable side effect of a profile update.
    pub fn render_to(&self, sink: &mut impl ChartSink) {
        for payload in self.chart_payload() {
            sink.update_series(&payload.name, &payload.points);
        }
        sink.full_render();
    }
}
