//! Utility functions for xtask commands

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use form_content::ContentFactory;
use form_core::{EquipSlots, FormId, FormRegistry, TerrainFeature};

/// Content factory for `data_dir`, or the bundled data when none is given.
pub fn content_factory(data_dir: Option<PathBuf>) -> ContentFactory {
    match data_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    }
}

/// Resolves a form by debug name ("ice_beast") or identifier text.
pub fn parse_form(name: &str) -> Result<FormId> {
    FormRegistry::global()
        .find_by_name(name)
        .map(|def| def.id)
        .ok_or_else(|| {
            let known: Vec<_> = FormRegistry::global()
                .iter()
                .map(|def| def.wiz_name)
                .collect();
            anyhow!("Unknown form '{}'. Known forms: {}", name, known.join(", "))
        })
}

pub fn parse_terrain(name: &str) -> Result<TerrainFeature> {
    name.parse()
        .map_err(|_| anyhow!("Unknown terrain '{}' (floor, shallow_water, deep_water, lava)", name))
}

/// Comma-separated slot names, or "-" for none.
pub fn format_slots(slots: EquipSlots) -> String {
    if slots.is_empty() {
        return "-".to_string();
    }
    slots
        .slots()
        .map(|slot| slot.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{:02x}", byte)).collect()
}

pub fn format_bytes(bytes: usize) -> String {
    const KB: usize = 1024;

    if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
