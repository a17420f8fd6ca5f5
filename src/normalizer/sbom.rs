use serde_json::Value;

use crate::models::{ComponentRecord, LicenseSource, Source};

/// Normalize an SBOM generator report (syft SPDX-style JSON).
///
/// Walks `packages[]`. Version prefers the SPDX `versionInfo` field over the
/// generic `version`; the declared license is taken from `licenseDeclared`
/// when present.
pub fn normalize(doc: &Value) -> Vec<ComponentRecord> {
    let mut records = Vec::new();

    if let Some(packages) = doc.get("packages").and_then(|v| v.as_array()) {
        for item in packages {
            let name = match field(item, "name") {
                Some(name) => name,
                None => continue,
            };

            let version = field(item, "versionInfo").or_else(|| field(item, "version"));

            let mut record =
                ComponentRecord::new(name.to_string(), version.map(str::to_string), Source::Sbom);

            if let Some(license) = field(item, "licenseDeclared") {
                record.license = Some(license.to_string());
                record.license_source = LicenseSource::Sbom;
            }

            records.push(record);
        }
    }

    records
}

/// Non-empty string field, or `None`.
fn field<'a>(item: &'a Value, key: &str) -> Option<&'a str> {
    item.get(key).and_then(|v| v.as_str()).filter(|s| !s.is_empty())
}
