use crate::config::GeoBounds;
use crate::geo::interface::RandomSource;
use serde::Serialize;
use std::sync::Arc;

pub const GEO_TWEAKS: [&str; 4] = [
    "🌬️ Crosswinds likely near coast.",
    "⛰️ Mountainous region. Maintain stability.",
    "🗺️ Flat zone. GPS signal strong.",
    "🚨 Restricted airspace ahead.",
];

/// Placeholder position and wind note. Not derived from any sensor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FakeGeoReading {
    pub lat: f64,
    pub lon: f64,
    pub tweak: &'static str,
}

pub struct FakeGeoGenerator {
    bounds: GeoBounds,
    random: Arc<dyn RandomSource + Send + Sync>,
}

impl FakeGeoGenerator {
    pub fn new(bounds: GeoBounds, random: Arc<dyn RandomSource + Send + Sync>) -> Self {
        Self { bounds, random }
    }

    pub fn next_reading(&self) -> FakeGeoReading {
        let lat = round6(self.uniform(self.bounds.lat_min, self.bounds.lat_max));
        let lon = round6(self.uniform(self.bounds.lon_min, self.bounds.lon_max));
        let tweak = GEO_TWEAKS[self.pick(GEO_TWEAKS.len())];
        FakeGeoReading { lat, lon, tweak }
    }

    fn uniform(&self, low: f64, high: f64) -> f64 {
        let unit = self.random.unit().clamp(0.0, 1.0);
        (low + unit * (high - low)).clamp(low, high)
    }

    fn pick(&self, len: usize) -> usize {
        let unit = self.random.unit().clamp(0.0, 1.0);
        ((unit * len as f64) as usize).min(len - 1)
    }
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
