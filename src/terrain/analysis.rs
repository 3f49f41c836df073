use crate::geo::fake_reading::FakeGeoReading;
use crate::terrain::advisory::{advisory, suggest_action, Action, Advisory};
use crate::terrain::terrain_class::TerrainClass;
use serde::Serialize;

/// Everything derived from one prediction; shared read-only by every output sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TerrainAnalysis {
    pub terrain: TerrainClass,
    pub advisory: Advisory,
    pub action: Action,
    pub geo: FakeGeoReading,
}

impl TerrainAnalysis {
    pub fn new(terrain: TerrainClass, geo: FakeGeoReading) -> Self {
        Self {
            terrain,
            advisory: advisory(terrain),
            action: suggest_action(terrain),
            geo,
        }
    }

    pub fn report_text(&self) -> String {
        format!(
            "🛰️ Terrain: {}\n📣 Message: {}\n📌 Geo Update: {}\n🧭 Location: ({}, {})\n🤖 Suggested Action: {}\n",
            self.terrain, self.advisory, self.geo.tweak, self.geo.lat, self.geo.lon, self.action
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_text_layout() {
        let analysis = TerrainAnalysis::new(
            TerrainClass::River,
            FakeGeoReading {
                lat: 12.934512,
                lon: 77.61,
                tweak: "🚨 Restricted airspace ahead.",
            },
        );

        assert_eq!(
            analysis.report_text(),
            "🛰️ Terrain: River\n\
             📣 Message: 🌊 Water detected. Be cautious of reflections.\n\
             📌 Geo Update: 🚨 Restricted airspace ahead.\n\
             🧭 Location: (12.934512, 77.61)\n\
             🤖 Suggested Action: 🆙 Ascend\n"
        );
    }
}
