use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use crate::config::BuildConfig;

/// Lists the shader sources directly inside `config.shader_dir`, in directory order.
pub fn discover_shaders(config: &BuildConfig) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(&config.shader_dir).with_context(|| {
        format!(
            "Failed to read shader directory {}",
            config.shader_dir.display()
        )
    })?;

    let mut shaders = Vec::new();

    for entry in entries {
        let entry = entry.with_context(|| {
            format!("Failed to read an entry in {}", config.shader_dir.display())
        })?;

        let name_owned = entry.file_name();
        let name = name_owned.to_string_lossy();

        if config.is_shader_source(&name) {
            shaders.push(config.shader_dir.join(&name_owned));
        } else {
            log::debug!("Skipping {}", entry.path().display());
        }
    }

    Ok(shaders)
}
