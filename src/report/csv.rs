//! CSV report generator.
//!
//! Hand-assembled comma-separated output suitable for spreadsheet import and
//! downstream compliance tooling. Fields containing commas, quotes or
//! newlines are quoted.

use std::path::PathBuf;

use anyhow::{Context, Result};

use super::SbomRow;
use crate::models::ComponentRecord;
use crate::reconcile::Inventories;

const FULL_HEADER: &str = "component,version,source,license,license_source,enriched_license,license_url";
const SBOM_HEADER: &str = "component,version,license,license_source,license_url";

/// Write the four CSV collections, returning the paths written.
pub fn write_reports(inventories: &Inventories, prefix: &str) -> Result<Vec<PathBuf>> {
    let files = [
        ("merged", render_full(&inventories.merged)),
        ("vulnerability", render_full(&inventories.vulnerability)),
        ("similarity", render_full(&inventories.similarity)),
        ("sbom", render_sbom(&inventories.sbom)),
    ];

    let mut written = Vec::new();
    for (suffix, content) in files {
        let path = PathBuf::from(format!("{}_{}.csv", prefix, suffix));
        std::fs::write(&path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}

/// Render the seven-column row shape shared by the merged and per-source views.
fn render_full(records: &[ComponentRecord]) -> String {
    let mut out = String::from(FULL_HEADER);
    out.push('\n');

    for record in records {
        let row = [
            escape(&record.component),
            escape(record.version.as_deref().unwrap_or("")),
            record.source.to_string(),
            escape(record.license.as_deref().unwrap_or("")),
            record.license_source.to_string(),
            escape(record.enriched_license.as_deref().unwrap_or("")),
            escape(&record.license_url),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// Render the five-column SBOM projection.
fn render_sbom(records: &[ComponentRecord]) -> String {
    let mut out = String::from(SBOM_HEADER);
    out.push('\n');

    for record in records {
        let row = SbomRow::from(record);
        let cells = [
            escape(row.component),
            escape(row.version.unwrap_or("")),
            escape(row.license.unwrap_or("")),
            row.license_source.to_string(),
            escape(row.license_url),
        ];
        out.push_str(&cells.join(","));
        out.push('\n');
    }

    out
}

/// Quote a field when it contains a comma, quote or newline.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
