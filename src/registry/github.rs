use anyhow::Result;
use reqwest::Client;

/// GitHub repository license endpoint for an `owner/repo`-shaped name.
pub fn lookup_url(component: &str) -> String {
    format!("https://api.github.com/repos/{}/license", component)
}

/// Fetch the license for a repository from the GitHub license API.
///
/// The component is taken verbatim as an `owner/repo` path; names that are
/// not repository paths 404 and yield `Ok(None)`.
pub async fn fetch_license(client: &Client, component: &str) -> Result<Option<String>> {
    let response = client
        .get(lookup_url(component))
        .header("User-Agent", "sbom-reconcilr/0.1.0")
        .header("Accept", "application/vnd.github+json")
        .send()
        .await?;

    if !response.status().is_success() {
        return Ok(None);
    }

    let data: serde_json::Value = response.json().await?;
    let license = data
        .get("license")
        .and_then(|l| l.get("spdx_id"))
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty() && *s != "NOASSERTION")
        .map(str::to_string);

    Ok(license)
}
