use serde::{Deserialize, Serialize};

/// Sentinel used wherever a value is absent: missing versions in identity
/// keys and the default license provenance URL.
pub const UNKNOWN: &str = "unknown";

/// One row of the component inventory, in the shape shared by all three
/// scanner schemas after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub component: String,
    /// `None` means "version unknown", not "no version".
    pub version: Option<String>,
    /// Which scanner produced the structural record.
    pub source: Source,
    /// License as already known from scanner output.
    pub license: Option<String>,
    /// Which scanner supplied `license`; independent of `source`.
    pub license_source: LicenseSource,
    /// License discovered via a registry lookup; set together with
    /// `license_url`, never alone.
    pub enriched_license: Option<String>,
    /// Provenance URL for the authoritative license value.
    pub license_url: String,
}

impl ComponentRecord {
    pub fn new(component: String, version: Option<String>, source: Source) -> Self {
        Self {
            component,
            version,
            source,
            license: None,
            license_source: LicenseSource::None,
            enriched_license: None,
            license_url: UNKNOWN.to_string(),
        }
    }

    /// Key used to correlate records across sources.
    ///
    /// A missing version participates as the literal `unknown` sentinel so
    /// version-less records keyed by different components never collide.
    pub fn identity_key(&self) -> String {
        identity_key(&self.component, self.version.as_deref())
    }
}

/// Build the `component@version` correlation key.
pub fn identity_key(component: &str, version: Option<&str>) -> String {
    format!("{}@{}", component, version.unwrap_or(UNKNOWN))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Sbom,
    Vulnerability,
    Similarity,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Sbom => write!(f, "sbom"),
            Source::Vulnerability => write!(f, "vulnerability"),
            Source::Similarity => write!(f, "similarity"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseSource {
    Sbom,
    Vulnerability,
    Similarity,
    /// No scanner supplied a license; serializes as the empty string.
    #[serde(rename = "")]
    None,
}

impl std::fmt::Display for LicenseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseSource::Sbom => write!(f, "sbom"),
            LicenseSource::Vulnerability => write!(f, "vulnerability"),
            LicenseSource::Similarity => write!(f, "similarity"),
            LicenseSource::None => Ok(()),
        }
    }
}
