use elevation::{Ground, query_elevation};
use foundation::units::LinearUnit;
use geometry::{Polyline, densify, planar_length};
use streaming::QueryTracker;

use crate::chart::ChartSink;
use crate::series::{SeriesPair, update_profile};

/// The sketched path is densified so the profile gets this many samples
/// regardless of its length.
const DENSIFY_SEGMENTS: f64 = 150.0;

/// Orchestrates one sketch-to-chart round: densify the path, sample both
/// surfaces, extract the paired profiles, hand them to the chart.
///
/// Owns the current `SeriesPair` (explicit state for the renderer and the
/// mouse indicator) and the query tracker that supersedes stale elevation
/// rounds. Holds nothing else between calls.
#[derive(Debug)]
pub struct ProfileTool {
    before_title: String,
    after_title: String,
    unit: LinearUnit,
    series: SeriesPair,
    tracker: QueryTracker,
}

impl ProfileTool {
    pub fn new(before_title: impl Into<String>, after_title: impl Into<String>) -> Self {
        Self {
            before_title: before_title.into(),
            after_title: after_title.into(),
            unit: LinearUnit::Meters,
            series: SeriesPair::baseline(),
            tracker: QueryTracker::new(),
        }
    }

    pub fn with_unit(mut self, unit: LinearUnit) -> Self {
        self.unit = unit;
        self
    }

    /// The pair currently on the chart.
    pub fn series(&self) -> &SeriesPair {
        &self.series
    }

    /// Recomputes both profiles for `path` and renders them.
    ///
    /// Called on every sketch update (vertex drag, cursor move while
    /// drawing, completion). A zero-length path leaves the chart untouched
    /// and returns false, as does a missing surface or a superseded query
    /// round. Each call begins a fresh query ticket, cancelling whatever
    /// round was still pending.
    pub fn refresh(
        &mut self,
        path: &Polyline,
        ground: &Ground,
        sink: &mut impl ChartSink,
    ) -> bool {
        let length = planar_length(path, self.unit);
        if length <= 0.0 {
            return false;
        }

        let dense = densify(path, length / DENSIFY_SEGMENTS, self.unit);
        let ticket = self.tracker.begin();

        let before = ground
            .layer_by_title(&self.before_title)
            .map(|layer| query_elevation(layer, &dense));
        let after = ground
            .layer_by_title(&self.after_title)
            .map(|layer| query_elevation(layer, &dense));

        // Queries resolve synchronously here, but the ticket discipline is
        // honored all the same: a superseded round never touches the chart.
        if !self.tracker.complete(ticket) {
            return false;
        }

        self.series = update_profile(before.as_ref(), after.as_ref(), self.unit);
        self.series.render_to(sink);
        true
    }

    /// Clears the sketch state: cancels any pending round and restores the
    /// flat baseline. Nothing survives a reset.
    pub fn reset(&mut self, sink: &mut impl ChartSink) {
        self.tracker.cancel();
        self.series = SeriesPair::baseline();
        self.series.render_to(sink);
    }
}
