use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Terrain categories in the order the classifier emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TerrainClass {
    AnnualCrop,
    Forest,
    HerbaceousVegetation,
    Highway,
    Industrial,
    Pasture,
    PermanentCrop,
    Residential,
    River,
    SeaLake,
}

impl TerrainClass {
    pub const ALL: [TerrainClass; 10] = [
        TerrainClass::AnnualCrop,
        TerrainClass::Forest,
        TerrainClass::HerbaceousVegetation,
        TerrainClass::Highway,
        TerrainClass::Industrial,
        TerrainClass::Pasture,
        TerrainClass::PermanentCrop,
        TerrainClass::Residential,
        TerrainClass::River,
        TerrainClass::SeaLake,
    ];

    pub fn from_index(index: usize) -> Option<TerrainClass> {
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            TerrainClass::AnnualCrop => "AnnualCrop",
            TerrainClass::Forest => "Forest",
            TerrainClass::HerbaceousVegetation => "HerbaceousVegetation",
            TerrainClass::Highway => "Highway",
            TerrainClass::Industrial => "Industrial",
            TerrainClass::Pasture => "Pasture",
            TerrainClass::PermanentCrop => "PermanentCrop",
            TerrainClass::Residential => "Residential",
            TerrainClass::River => "River",
            TerrainClass::SeaLake => "SeaLake",
        }
    }
}

impl fmt::Display for TerrainClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown terrain label: {0}")]
pub struct UnknownTerrainLabel(pub String);

impl FromStr for TerrainClass {
    type Err = UnknownTerrainLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|class| class.label() == s)
            .copied()
            .ok_or_else(|| UnknownTerrainLabel(s.to_string()))
    }
}
