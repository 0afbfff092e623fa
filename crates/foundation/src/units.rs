/// Linear units for planar distances.
///
/// Distances inside the engine are carried in projected map units (meters);
/// callers choose the unit they want reported.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LinearUnit {
    Meters,
    Kilometers,
    Feet,
}

/// International foot (exact).
const METERS_PER_FOOT: f64 = 0.3048;

impl LinearUnit {
    pub fn meters_per_unit(self) -> f64 {
        match self {
            LinearUnit::Meters => 1.0,
            LinearUnit::Kilometers => 1_000.0,
            LinearUnit::Feet => METERS_PER_FOOT,
        }
    }

    /// Converts a length in meters into this unit.
    pub fn from_meters(self, meters: f64) -> f64 {
        meters / self.meters_per_unit()
    }

    /// Converts a length in this unit into meters.
    pub fn to_meters(self, value: f64) -> f64 {
        value * self.meters_per_unit()
    }
}

impl Default for LinearUnit {
    fn default() -> Self {
        LinearUnit::Meters
    }
}
