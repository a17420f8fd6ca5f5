use std::collections::HashMap;

use serde_json::Value;

use crate::models::{identity_key, ComponentRecord, LicenseSource, Source};

/// Normalized output of the vulnerability scanner: the per-match records and
/// the license index consulted during reconciliation.
#[derive(Debug, Default)]
pub struct VulnerabilityScan {
    pub records: Vec<ComponentRecord>,
    /// Identity key → license from the *last* match in document order.
    /// Absent licenses are stored too, so a later license-less match
    /// overwrites an earlier license for the same key.
    pub licenses: HashMap<String, Option<String>>,
}

/// Normalize a vulnerability scanner report (grype JSON).
///
/// One record per `matches[]` entry; matches missing either the artifact
/// name or version are skipped. The match-level `artifact.license` is
/// preferred over the nested `vulnerability.license`.
pub fn normalize(doc: &Value) -> VulnerabilityScan {
    let mut scan = VulnerabilityScan::default();

    if let Some(matches) = doc.get("matches").and_then(|v| v.as_array()) {
        for entry in matches {
            let artifact = entry.get("artifact");
            let name = artifact.and_then(|a| a.get("name")).and_then(|v| v.as_str());
            let version = artifact.and_then(|a| a.get("version")).and_then(|v| v.as_str());

            let (name, version) = match (
                name.filter(|s| !s.is_empty()),
                version.filter(|s| !s.is_empty()),
            ) {
                (Some(n), Some(v)) => (n, v),
                _ => continue,
            };

            let license = artifact
                .and_then(|a| a.get("license"))
                .and_then(|v| v.as_str())
                .or_else(|| {
                    entry
                        .get("vulnerability")
                        .and_then(|v| v.get("license"))
                        .and_then(|v| v.as_str())
                })
                .filter(|s| !s.is_empty())
                .map(str::to_string);

            let mut record = ComponentRecord::new(
                name.to_string(),
                Some(version.to_string()),
                Source::Vulnerability,
            );
            record.license = license.clone();
            if record.license.is_some() {
                record.license_source = LicenseSource::Vulnerability;
            }

            scan.licenses.insert(identity_key(name, Some(version)), license);
            scan.records.push(record);
        }
    }

    scan
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_last_match_wins_in_license_index() {
        let doc = json!({
            "matches": [
                { "artifact": { "name": "left-pad", "version": "1.3.0", "license": "MIT" } },
                { "artifact": { "name": "left-pad", "version": "1.3.0", "license": "ISC" } }
            ]
        });

        let scan = normalize(&doc);
        assert_eq!(scan.records.len(), 2);
        assert_eq!(
            scan.licenses.get("left-pad@1.3.0"),
            Some(&Some("ISC".to_string()))
        );
    }

    #[test]
    fn test_later_licenseless_match_overwrites() {
        let doc = json!({
            "matches": [
                { "artifact": { "name": "left-pad", "version": "1.3.0", "license": "MIT" } },
                { "artifact": { "name": "left-pad", "version": "1.3.0" } }
            ]
        });

        let scan = normalize(&doc);
        assert_eq!(scan.licenses.get("left-pad@1.3.0"), Some(&None));
    }

    #[test]
    fn test_matches_missing_name_or_version_are_skipped() {
        let doc = json!({
            "matches": [
                { "artifact": { "name": "no-version" } },
                { "artifact": { "version": "1.0.0" } },
                { "vulnerability": { "license": "MIT" } },
                { "artifact": { "name": "kept", "version": "1.0.0" } }
            ]
        });

        let scan = normalize(&doc);
        assert_eq!(scan.records.len(), 1);
        assert_eq!(scan.records[0].component, "kept");
        assert_eq!(scan.licenses.len(), 1);
    }

    #[test]
    fn test_vulnerability_level_license_fallback() {
        let doc = json!({
            "matches": [
                {
                    "artifact": { "name": "left-pad", "version": "1.3.0" },
                    "vulnerability": { "license": "Apache-2.0" }
                }
            ]
        });

        let scan = normalize(&doc);
        assert_eq!(scan.records[0].license.as_deref(), Some("Apache-2.0"));
        assert_eq!(scan.records[0].license_source, LicenseSource::Vulnerability);
    }
}
