use std::{fs, path::Path};

use anyhow::{Context, Result};

/// Creates `output_dir` and any missing parents. A no-op if it already exists.
pub fn ensure_output_dir(output_dir: &Path) -> Result<()> {
    if output_dir.exists() {
        return Ok(());
    }

    log::info!(
        "Output directory doesn't exist, creating {}...",
        output_dir.display()
    );

    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            output_dir.display()
        )
    })
}
