//! Content factory for building oracles from data files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use form_core::{BaselineProfile, FormConfig, ItemDescriptor, MemoryEquipment};
use tracing::debug;

use crate::loaders::{ConfigLoader, LoadResult, LoadoutLoader, SpeciesLoader};

/// Content factory that loads all form content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── species.ron
/// └── loadout.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Points at the data directory shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load rule configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<FormConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load every species baseline from `species.ron`.
    pub fn load_species(&self) -> LoadResult<BTreeMap<String, BaselineProfile>> {
        let path = self.data_dir.join("species.ron");
        let species = SpeciesLoader::load(&path)?;
        debug!(count = species.len(), "loaded species");
        Ok(species)
    }

    /// Load one species baseline by name.
    pub fn load_baseline(&self, name: &str) -> LoadResult<BaselineProfile> {
        let mut species = self.load_species()?;
        species
            .remove(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown species '{}'", name))
    }

    /// Load the starting loadout from `loadout.ron`.
    pub fn load_loadout(&self) -> LoadResult<Vec<ItemDescriptor>> {
        let path = self.data_dir.join("loadout.ron");
        LoadoutLoader::load(&path)
    }

    /// Load the starting loadout and wear it.
    pub fn load_equipment(&self) -> LoadResult<MemoryEquipment> {
        let items = self.load_loadout()?;
        Ok(LoadoutLoader::equip(&items))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
