//! Equipment loadout loader.

use std::path::Path;

use form_core::{EquipSlots, ItemDescriptor, MemoryEquipment};

use crate::loaders::{LoadResult, read_file};

/// Loader for worn-item lists from RON files.
pub struct LoadoutLoader;

impl LoadoutLoader {
    /// Load a loadout from a RON file.
    ///
    /// RON format: `Vec<ItemDescriptor>`, at most one item per slot.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDescriptor>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ItemDescriptor>> {
        let items: Vec<ItemDescriptor> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse loadout RON: {}", e))?;

        let mut taken = EquipSlots::empty();
        for item in &items {
            if taken.contains(item.slot.flag()) {
                anyhow::bail!("Loadout wears two items in slot {}", item.slot);
            }
            taken |= item.slot.flag();
        }

        Ok(items)
    }

    /// Puts every item on in a fresh in-memory equipment store.
    pub fn equip(items: &[ItemDescriptor]) -> MemoryEquipment {
        let mut equipment = MemoryEquipment::new();
        for item in items {
            equipment.wear(*item);
        }
        equipment
    }
}
