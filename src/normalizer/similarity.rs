use std::collections::HashSet;

use serde_json::Value;

use crate::models::{ComponentRecord, LicenseSource, Source};

/// Normalize a source-similarity report (scanoss JSON).
///
/// The document maps each scanned file path to a list of match objects, and
/// the same component routinely appears under many paths. Records are
/// deduplicated by identity key as they are collected: the first occurrence
/// wins and later matches are ignored even when their fields differ.
pub fn normalize(doc: &Value) -> Vec<ComponentRecord> {
    let mut records = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    if let Some(files) = doc.as_object() {
        for matches in files.values() {
            let matches = match matches.as_array() {
                Some(list) => list,
                None => continue,
            };

            for entry in matches {
                let name = entry
                    .get("component")
                    .and_then(|v| v.as_str())
                    .filter(|s| !s.is_empty());
                let name = match name {
                    Some(n) => n,
                    None => continue,
                };

                let version = entry
                    .get("version")
                    .and_then(|v| v.as_str())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string);

                let mut record =
                    ComponentRecord::new(name.to_string(), version, Source::Similarity);

                // Only the first listed license is considered.
                if let Some(license) = entry.get("licenses").and_then(|v| v.as_array()).and_then(|l| l.first()) {
                    if let Some(license_name) = license
                        .get("name")
                        .and_then(|v| v.as_str())
                        .filter(|s| !s.is_empty())
                    {
                        record.license = Some(license_name.to_string());
                        record.license_source = LicenseSource::Similarity;
                    }
                    if let Some(url) = license
                        .get("url")
                        .and_then(|v| v.as_str())
                        .filter(|s| !s.is_empty())
                    {
                        record.license_url = url.to_string();
                    }
                }

                if seen.insert(record.identity_key()) {
                    records.push(record);
                }
            }
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNKNOWN;
    use serde_json::json;

    #[test]
    fn test_first_occurrence_wins_across_files() {
        let doc = json!({
            "src/a.js": [
                {
                    "component": "left-pad",
                    "version": "1.3.0",
                    "licenses": [{ "name": "MIT", "url": "https://spdx.org/licenses/MIT" }]
                }
            ],
            "src/b.js": [
                {
                    "component": "left-pad",
                    "version": "1.3.0",
                    "licenses": [{ "name": "ISC", "url": "https://spdx.org/licenses/ISC" }]
                }
            ]
        });

        let records = normalize(&doc);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].license.as_deref(), Some("MIT"));
        assert_eq!(records[0].license_url, "https://spdx.org/licenses/MIT");
    }

    #[test]
    fn test_distinct_versions_are_distinct_records() {
        let doc = json!({
            "src/a.js": [
                { "component": "left-pad", "version": "1.3.0" },
                { "component": "left-pad", "version": "1.4.0" },
                { "component": "left-pad" }
            ]
        });

        let records = normalize(&doc);
        assert_eq!(records.len(), 3);
        assert!(records[2].version.is_none());
    }

    #[test]
    fn test_first_license_of_list_is_used() {
        let doc = json!({
            "src/a.c": [
                {
                    "component": "zlib",
                    "version": "1.2.13",
                    "licenses": [
                        { "name": "Zlib", "url": "https://spdx.org/licenses/Zlib" },
                        { "name": "MIT" }
                    ]
                }
            ]
        });

        let records = normalize(&doc);
        assert_eq!(records[0].license.as_deref(), Some("Zlib"));
    }

    #[test]
    fn test_matches_without_component_are_dropped() {
        let doc = json!({
            "src/a.c": [
                { "version": "1.0.0", "licenses": [{ "name": "MIT" }] }
            ]
        });

        assert!(normalize(&doc).is_empty());
    }

    #[test]
    fn test_unexpected_shape_yields_empty() {
        assert!(normalize(&json!([{ "component": "x" }])).is_empty());
        assert!(normalize(&json!({ "src/a.c": { "component": "x" } })).is_empty());
    }

    #[test]
    fn test_missing_license_keeps_defaults() {
        let doc = json!({
            "src/a.c": [{ "component": "zlib", "version": "1.2.13", "licenses": [] }]
        });

        let records = normalize(&doc);
        assert!(records[0].license.is_none());
        assert_eq!(records[0].license_source, LicenseSource::None);
        assert_eq!(records[0].license_url, UNKNOWN);
    }
}
