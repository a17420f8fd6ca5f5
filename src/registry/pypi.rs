use anyhow::Result;
use reqwest::Client;

/// PyPI JSON metadata endpoint.
pub fn lookup_url(component: &str) -> String {
    format!("https://pypi.org/pypi/{}/json", component)
}

/// Fetch the license for a Python package from PyPI.
pub async fn fetch_license(client: &Client, component: &str) -> Result<Option<String>> {
    let response = client
        .get(lookup_url(component))
        .header("User-Agent", "sbom-reconcilr/0.1.0")
        .send()
        .await?;

    if !response.status().is_success() {
        return Ok(None);
    }

    let data: serde_json::Value = response.json().await?;
    let license = data
        .get("info")
        .and_then(|i| i.get("license"))
        .and_then(|l| l.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(license)
}
