use geometry::{PathVertex, Polyline};

use crate::grid::ElevationSampler;

/// A named elevation surface, e.g. "Terrain3D" or "Kilauea_Elevation".
///
/// The comparison tool locates its "before" and "after" surfaces by title,
/// so the title is the identity that matters here.
pub struct ElevationLayer {
    pub title: String,
    sampler: Box<dyn ElevationSampler>,
}

impl ElevationLayer {
    pub fn new(title: impl Into<String>, sampler: impl ElevationSampler + 'static) -> Self {
        Self {
            title: title.into(),
            sampler: Box::new(sampler),
        }
    }

    pub fn sampler(&self) -> &dyn ElevationSampler {
        self.sampler.as_ref()
    }
}

impl std::fmt::Debug for ElevationLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElevationLayer")
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// The ordered set of elevation surfaces under a scene.
#[derive(Debug, Default)]
pub struct Ground {
    layers: Vec<ElevationLayer>,
}

impl Ground {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_layer(&mut self, layer: ElevationLayer) {
        self.layers.push(layer);
    }

    /// First layer whose title matches exactly, in insertion order.
    pub fn layer_by_title(&self, title: &str) -> Option<&ElevationLayer> {
        self.layers.iter().find(|l| l.title == title)
    }

    pub fn layers(&self) -> &[ElevationLayer] {
        &self.layers
    }
}

/// Samples `layer` along `polyline`, producing the same planar geometry with
/// z replaced by the surface elevation.
///
/// Vertices outside the surface extent keep z = 0.0; this transform never
/// fails. Part structure and vertex order are preserved; measures are not
/// carried over.
pub fn query_elevation(layer: &ElevationLayer, polyline: &Polyline) -> Polyline {
    let mut out = Polyline::new();
    for part in &polyline.parts {
        let sampled = part
            .iter()
            .map(|v| {
                let z = layer.sampler().elevation_at(v.x, v.y).unwrap_or(0.0);
                PathVertex::new(v.x, v.y, z)
            })
            .collect();
        out.push_part(sampled);
    }
    out
}
