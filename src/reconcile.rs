//! Merge and deduplicate normalized records across sources.
//!
//! The pipeline is a one-shot run: the vulnerability license index is fully
//! built before it is read, every record is owned by exactly one stage at a
//! time, and nothing persists between invocations.

use std::collections::HashSet;

use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};

use crate::models::{ComponentRecord, LicenseSource};
use crate::normalizer::vulnerability::VulnerabilityScan;
use crate::registry::LicenseResolver;

/// The four output collections handed to the report emitter.
#[derive(Debug)]
pub struct Inventories {
    /// Cross-source view: SBOM records followed by similarity records,
    /// deduplicated. Vulnerability records never appear here.
    pub merged: Vec<ComponentRecord>,
    pub sbom: Vec<ComponentRecord>,
    pub vulnerability: Vec<ComponentRecord>,
    pub similarity: Vec<ComponentRecord>,
}

/// Records enriched concurrently per batch; each record's own chain stays
/// sequential.
const BATCH_SIZE: usize = 25;

/// Run the full reconciliation pipeline.
///
/// Vulnerability records contribute license data only — they feed their own
/// inventory but never merged rows. With `resolver = None` (offline runs)
/// registry enrichment is skipped entirely.
pub async fn reconcile(
    resolver: Option<&LicenseResolver>,
    mut sbom: Vec<ComponentRecord>,
    vulnerability: VulnerabilityScan,
    similarity: Vec<ComponentRecord>,
    quiet: bool,
) -> Inventories {
    apply_vulnerability_licenses(&mut sbom, &vulnerability);

    if let Some(resolver) = resolver {
        enrich(resolver, &mut sbom, quiet).await;
    }

    assemble(sbom, vulnerability.records, similarity)
}

/// Fill license-less SBOM records from the vulnerability license index.
pub fn apply_vulnerability_licenses(records: &mut [ComponentRecord], scan: &VulnerabilityScan) {
    for record in records.iter_mut().filter(|r| r.license.is_none()) {
        if let Some(Some(license)) = scan.licenses.get(&record.identity_key()) {
            record.license = Some(license.clone());
            record.license_source = LicenseSource::Vulnerability;
        }
    }
}

/// Resolve registry licenses for every SBOM record, in concurrent batches.
///
/// Enrichment augments the scanner-declared license rather than replacing
/// it: only `enriched_license` and `license_url` are written, and only
/// together on success.
pub async fn enrich(resolver: &LicenseResolver, records: &mut [ComponentRecord], quiet: bool) {
    let pb = if quiet {
        None
    } else {
        let pb = ProgressBar::new(records.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.set_message("resolving licenses");
        Some(pb)
    };

    for batch in records.chunks_mut(BATCH_SIZE) {
        let resolutions = join_all(batch.iter().map(|record| resolver.resolve(record))).await;

        for (record, resolution) in batch.iter_mut().zip(resolutions) {
            if let Some(license) = resolution.license {
                record.enriched_license = Some(license);
                record.license_url = resolution.url;
            }
            if let Some(pb) = &pb {
                pb.inc(1);
            }
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
}

/// Concatenate and deduplicate into the final inventories.
///
/// The merged view collapses records equal on
/// `(component, version, license, enriched_license)` — provenance-only
/// differences do not keep a row alive. Per-source views deduplicate by
/// full-record equality. First occurrence wins everywhere, so output order
/// is stable across runs.
pub fn assemble(
    sbom: Vec<ComponentRecord>,
    vulnerability: Vec<ComponentRecord>,
    similarity: Vec<ComponentRecord>,
) -> Inventories {
    let mut merged = Vec::new();
    let mut seen: HashSet<(String, Option<String>, Option<String>, Option<String>)> =
        HashSet::new();

    for record in sbom.iter().chain(similarity.iter()) {
        let key = (
            record.component.clone(),
            record.version.clone(),
            record.license.clone(),
            record.enriched_license.clone(),
        );
        if seen.insert(key) {
            merged.push(record.clone());
        }
    }

    Inventories {
        merged,
        sbom: dedup_records(sbom),
        vulnerability: dedup_records(vulnerability),
        similarity: dedup_records(similarity),
    }
}

/// Drop exact duplicates, preserving first-occurrence order.
fn dedup_records(records: Vec<ComponentRecord>) -> Vec<ComponentRecord> {
    let mut seen: HashSet<ComponentRecord> = HashSet::new();
    let mut out = Vec::new();

    for record in records {
        if seen.insert(record.clone()) {
            out.push(record);
        }
    }

    out
}
