//! Species baseline loader.

use std::collections::BTreeMap;
use std::path::Path;

use form_core::BaselineProfile;

use crate::loaders::{LoadResult, read_file};

/// Loader for species baselines from RON files.
pub struct SpeciesLoader;

impl SpeciesLoader {
    /// Load the species table from a RON file.
    ///
    /// RON format: `{ "name": BaselineProfile, ... }`. Fields left out of a
    /// profile fall back to an average medium-sized humanoid.
    pub fn load(path: &Path) -> LoadResult<BTreeMap<String, BaselineProfile>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BTreeMap<String, BaselineProfile>> {
        let species: BTreeMap<String, BaselineProfile> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse species RON: {}", e))?;

        for (name, profile) in &species {
            if profile.hand_name.is_empty() || profile.foot_name.is_empty() {
                anyhow::bail!("Species '{}' has an empty body-part name", name);
            }
        }

        Ok(species)
    }
}
