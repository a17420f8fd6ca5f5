//! Async HTTP clients for fetching license data from public registries.
//!
//! Each registry module exposes a `fetch_license(client, component)` function
//! that returns `Ok(Some(license_string))` on success, `Ok(None)` when the
//! component is not found or has no license field, and `Err` on network
//! failures. The resolver treats `Ok(None)` and `Err` identically: no answer
//! from that step, fall through to the next registry.

pub mod github;
pub mod npm;
pub mod pypi;

use std::time::Duration;

use anyhow::Result;
use futures::future::BoxFuture;
use reqwest::Client;

use crate::models::{ComponentRecord, UNKNOWN};

/// Outcome of a resolution attempt. `license` and `url` travel together:
/// either both carry registry data or the pair is [`Resolution::unknown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub license: Option<String>,
    pub url: String,
}

impl Resolution {
    pub fn unknown() -> Self {
        Self {
            license: None,
            url: UNKNOWN.to_string(),
        }
    }
}

/// One step of the license fallback chain.
pub trait LicenseLookup: Send + Sync {
    /// Endpoint queried for `component`; doubles as the provenance URL when
    /// the lookup succeeds.
    fn lookup_url(&self, component: &str) -> String;

    fn fetch_license<'a>(&'a self, component: &'a str) -> BoxFuture<'a, Result<Option<String>>>;
}

/// Source-hosting registry step: the component name as a repository path.
pub struct GitHubRegistry {
    pub client: Client,
}

impl LicenseLookup for GitHubRegistry {
    fn lookup_url(&self, component: &str) -> String {
        github::lookup_url(component)
    }

    fn fetch_license<'a>(&'a self, component: &'a str) -> BoxFuture<'a, Result<Option<String>>> {
        Box::pin(github::fetch_license(&self.client, component))
    }
}

pub struct NpmRegistry {
    pub client: Client,
}

impl LicenseLookup for NpmRegistry {
    fn lookup_url(&self, component: &str) -> String {
        npm::lookup_url(component)
    }

    fn fetch_license<'a>(&'a self, component: &'a str) -> BoxFuture<'a, Result<Option<String>>> {
        Box::pin(npm::fetch_license(&self.client, component))
    }
}

pub struct PypiRegistry {
    pub client: Client,
}

impl LicenseLookup for PypiRegistry {
    fn lookup_url(&self, component: &str) -> String {
        pypi::lookup_url(component)
    }

    fn fetch_license<'a>(&'a self, component: &'a str) -> BoxFuture<'a, Result<Option<String>>> {
        Box::pin(pypi::fetch_license(&self.client, component))
    }
}

/// Executes the registry fallback chain for a single record.
pub struct LicenseResolver {
    chain: Vec<Box<dyn LicenseLookup>>,
    pacing: Duration,
}

impl LicenseResolver {
    /// Standard chain: source-hosting registry, then npm, then PyPI.
    ///
    /// Every step is probed unconditionally regardless of how plausible the
    /// name is for that ecosystem; implausible lookups come back empty and
    /// the chain falls through.
    pub fn new(client: Client, pacing: Duration) -> Self {
        let chain: Vec<Box<dyn LicenseLookup>> = vec![
            Box::new(GitHubRegistry {
                client: client.clone(),
            }),
            Box::new(NpmRegistry {
                client: client.clone(),
            }),
            Box::new(PypiRegistry { client }),
        ];
        Self { chain, pacing }
    }

    /// Build a resolver over a custom chain.
    pub fn with_chain(chain: Vec<Box<dyn LicenseLookup>>, pacing: Duration) -> Self {
        Self { chain, pacing }
    }

    /// Walk the chain in order and return the first successful lookup.
    ///
    /// Lookups are keyed by component name only; the record's version is
    /// carried but deliberately unused. A fixed pacing delay precedes every
    /// outbound call. A failed or empty step never aborts the chain.
    pub async fn resolve(&self, record: &ComponentRecord) -> Resolution {
        for registry in &self.chain {
            tokio::time::sleep(self.pacing).await;

            match registry.fetch_license(&record.component).await {
                Ok(Some(license)) => {
                    return Resolution {
                        license: Some(license),
                        url: registry.lookup_url(&record.component),
                    };
                }
                // No answer from this step.
                Ok(None) | Err(_) => {}
            }
        }

        Resolution::unknown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Source;
    use std::sync::{Arc, Mutex};

    /// Chain step that records its invocation and answers from a script.
    struct StubLookup {
        name: &'static str,
        license: Option<&'static str>,
        fail: bool,
        calls: Arc<Mutex<Vec<&'static str>>>,
    }

    impl LicenseLookup for StubLookup {
        fn lookup_url(&self, component: &str) -> String {
            format!("https://{}.example/{}", self.name, component)
        }

        fn fetch_license<'a>(&'a self, _component: &'a str) -> BoxFuture<'a, Result<Option<String>>> {
            Box::pin(async move {
                self.calls.lock().unwrap().push(self.name);
                if self.fail {
                    anyhow::bail!("connection refused");
                }
                Ok(self.license.map(str::to_string))
            })
        }
    }

    fn stub(
        name: &'static str,
        license: Option<&'static str>,
        fail: bool,
        calls: &Arc<Mutex<Vec<&'static str>>>,
    ) -> Box<dyn LicenseLookup> {
        Box::new(StubLookup {
            name,
            license,
            fail,
            calls: calls.clone(),
        })
    }

    fn record(name: &str) -> ComponentRecord {
        ComponentRecord::new(name.to_string(), Some("1.3.0".to_string()), Source::Sbom)
    }

    #[tokio::test]
    async fn test_fallback_reaches_last_step_in_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let resolver = LicenseResolver::with_chain(
            vec![
                stub("github", None, true, &calls),
                stub("npm", None, false, &calls),
                stub("pypi", Some("MIT"), false, &calls),
            ],
            Duration::ZERO,
        );

        let resolution = resolver.resolve(&record("left-pad")).await;

        assert_eq!(*calls.lock().unwrap(), vec!["github", "npm", "pypi"]);
        assert_eq!(resolution.license.as_deref(), Some("MIT"));
        assert_eq!(resolution.url, "https://pypi.example/left-pad");
    }

    #[tokio::test]
    async fn test_first_success_short_circuits() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let resolver = LicenseResolver::with_chain(
            vec![
                stub("github", Some("Apache-2.0"), false, &calls),
                stub("npm", Some("MIT"), false, &calls),
            ],
            Duration::ZERO,
        );

        let resolution = resolver.resolve(&record("torvalds/linux")).await;

        assert_eq!(*calls.lock().unwrap(), vec!["github"]);
        assert_eq!(resolution.license.as_deref(), Some("Apache-2.0"));
        assert_eq!(resolution.url, "https://github.example/torvalds/linux");
    }

    #[tokio::test]
    async fn test_exhausted_chain_is_unknown() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let resolver = LicenseResolver::with_chain(
            vec![
                stub("github", None, true, &calls),
                stub("npm", None, true, &calls),
                stub("pypi", None, false, &calls),
            ],
            Duration::ZERO,
        );

        let resolution = resolver.resolve(&record("left-pad")).await;

        assert_eq!(resolution, Resolution::unknown());
        assert_eq!(resolution.url, UNKNOWN);
        assert_eq!(calls.lock().unwrap().len(), 3);
    }
}
