use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::model::Roster;

const OUTPUT_STEM: &str = "characters_output_";

pub fn output_path(dir: &Path, version: &str) -> PathBuf {
    dir.join(format!("{}{}.json", OUTPUT_STEM, version))
}

/// Write the roster as JSON, replacing any earlier output for the same version.
pub fn write_roster(roster: &Roster, dir: &Path, version: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let path = output_path(dir, version);

    let file = File::create(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, roster)?;
    writer.flush()?;

    info!("Saved {} characters to {}", roster.len(), path.display());
    Ok(path)
}
