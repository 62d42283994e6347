//! Terrain oracle exposing the feature under the character.

/// Terrain features that matter to body-state rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TerrainFeature {
    #[default]
    Floor,
    ShallowWater,
    DeepWater,
    Lava,
}

impl TerrainFeature {
    pub fn is_water(self) -> bool {
        matches!(self, TerrainFeature::ShallowWater | TerrainFeature::DeepWater)
    }
}

/// Read-only view of the map at the character's location.
pub trait TerrainOracle: Send + Sync {
    /// Feature the character is currently standing on.
    fn feature_here(&self) -> TerrainFeature;
}

impl TerrainOracle for TerrainFeature {
    fn feature_here(&self) -> TerrainFeature {
        *self
    }
}
