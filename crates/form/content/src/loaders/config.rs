//! Rule configuration loader.

use std::path::Path;

use form_core::FormConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`FormConfig`] from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys take their defaults and out-of-range values are clamped.
    pub fn load(path: &Path) -> LoadResult<FormConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<FormConfig> {
        let config: FormConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config.normalized())
    }
}
