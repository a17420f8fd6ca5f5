//! Report emitters for the reconciled inventories.
//!
//! - [`terminal`] — colored summary, optionally the full merged table.
//! - [`csv`] — one CSV file per output collection.
//! - [`json`] — the merged inventory as pretty-printed JSON.

pub mod csv;
pub mod json;
pub mod terminal;

use serde::Serialize;

use crate::models::{ComponentRecord, LicenseSource};

/// The five-column projection used for the SBOM-source view.
///
/// Enrichment is reported through the merged view, so this one carries
/// neither `source` nor `enriched_license`.
#[derive(Debug, Serialize)]
pub struct SbomRow<'a> {
    pub component: &'a str,
    pub version: Option<&'a str>,
    pub license: Option<&'a str>,
    pub license_source: LicenseSource,
    pub license_url: &'a str,
}

impl<'a> From<&'a ComponentRecord> for SbomRow<'a> {
    fn from(record: &'a ComponentRecord) -> Self {
        Self {
            component: &record.component,
            version: record.version.as_deref(),
            license: record.license.as_deref(),
            license_source: record.license_source,
            license_url: &record.license_url,
        }
    }
}
