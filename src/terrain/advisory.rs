use crate::terrain::terrain_class::TerrainClass;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub icon: &'static str,
    pub message: &'static str,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.icon.is_empty() {
            f.write_str(self.message)
        } else {
            write!(f, "{} {}", self.icon, self.message)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    Ascend,
    Hold,
    Proceed,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Ascend => "Ascend",
            Action::Hold => "Hold",
            Action::Proceed => "Proceed",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Ascend => f.write_str("🆙 Ascend"),
            Action::Hold => f.write_str("🛑 Hold position"),
            Action::Proceed => f.write_str("✅ Proceed"),
        }
    }
}

pub fn advisory(class: TerrainClass) -> Advisory {
    let (icon, message) = match class {
        TerrainClass::AnnualCrop => ("🌾", "Crop field detected. Maintain medium altitude."),
        TerrainClass::Forest => ("🌲", "Stable zone. Expect calm wind."),
        TerrainClass::HerbaceousVegetation => ("🌿", "Open terrain. Good visibility."),
        TerrainClass::Highway => ("🛣️", "Road ahead. Avoid low altitude."),
        TerrainClass::Industrial => ("🏭", "Obstructions likely. Maintain max altitude."),
        TerrainClass::Pasture => ("🐄", "Livestock zone. Maintain safe distance."),
        TerrainClass::PermanentCrop => ("", "Orchard zone. Monitor tree height."),
        TerrainClass::Residential => ("🏘️", "Urban zone. Avoid low flyovers."),
        TerrainClass::River => ("🌊", "Water detected. Be cautious of reflections."),
        TerrainClass::SeaLake => ("🌅", "Large water body. Ensure GPS lock."),
    };
    Advisory { icon, message }
}

pub fn suggest_action(class: TerrainClass) -> Action {
    match class {
        TerrainClass::River | TerrainClass::SeaLake => Action::Ascend,
        TerrainClass::Residential => Action::Hold,
        _ => Action::Proceed,
    }
}

/// Same rule as [`suggest_action`] for labels that may fall outside the known set.
pub fn suggest_action_for_label(label: &str) -> Action {
    match label.parse::<TerrainClass>() {
        Ok(class) => suggest_action(class),
        Err(_) => Action::Proceed,
    }
}
