//! Per-scanner normalizers turning raw report JSON into the common
//! [`ComponentRecord`](crate::models::ComponentRecord) shape.
//!
//! Each module exposes a single `normalize(doc)` function that never fails:
//! a document missing the expected structure yields an empty (or partial)
//! record list, and entries without a component name are dropped. Reading
//! and parsing the file is the caller's job — see [`read_document`].

pub mod sbom;
pub mod similarity;
pub mod vulnerability;

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Read and parse a scanner report.
///
/// A missing file is `Ok(None)` — that source simply contributes nothing to
/// the run. A file that exists but does not parse is an error carrying the
/// triggering filename.
pub fn read_document(path: &Path) -> Result<Option<Value>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let doc = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    Ok(Some(doc))
}
