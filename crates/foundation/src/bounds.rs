use crate::math::Vec2;

/// Axis-aligned 2D bounding box.
///
/// Chart collaborators use this to range axes over a profile series, so it
/// supports incremental accumulation as well as one-shot construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb2 {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl Aabb2 {
    pub fn new(min: [f64; 2], max: [f64; 2]) -> Self {
        Aabb2 { min, max }
    }

    /// A box covering exactly one point.
    pub fn from_point(p: Vec2) -> Self {
        Aabb2::new([p.x, p.y], [p.x, p.y])
    }

    /// Accumulates a box over `points`; `None` when the slice is empty.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let first = points.first()?;
        let mut b = Aabb2::from_point(*first);
        for p in points.iter().skip(1) {
            b.extend(*p);
        }
        Some(b)
    }

    pub fn extend(&mut self, p: Vec2) {
        self.min[0] = self.min[0].min(p.x);
        self.min[1] = self.min[1].min(p.y);
        self.max[0] = self.max[0].max(p.x);
        self.max[1] = self.max[1].max(p.y);
    }

    pub fn union(self, other: Self) -> Self {
        Aabb2::new(
            [
                self.min[0].min(other.min[0]),
                self.min[1].min(other.min[1]),
            ],
            [
                self.max[0].max(other.max[0]),
                self.max[1].max(other.max[1]),
            ],
        )
    }

    pub fn width(&self) -> f64 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f64 {
        self.max[1] - self.min[1]
    }
}
