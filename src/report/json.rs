//! JSON report output, mirroring the merged CSV collection.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::reconcile::Inventories;

/// Write the merged inventory as pretty-printed JSON, returning the path.
pub fn write_report(inventories: &Inventories, prefix: &str) -> Result<PathBuf> {
    let path = PathBuf::from(format!("{}_merged.json", prefix));
    let content = serde_json::to_string_pretty(&inventories.merged)?;
    std::fs::write(&path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
