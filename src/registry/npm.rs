use anyhow::Result;
use reqwest::Client;

/// npm registry metadata endpoint.
/// Scoped packages need URL encoding: `@scope/pkg` → `%40scope%2Fpkg`.
pub fn lookup_url(component: &str) -> String {
    let encoded = component.replace('@', "%40").replace('/', "%2F");
    format!("https://registry.npmjs.org/{}", encoded)
}

/// Fetch the license for an npm package from the npm registry.
///
/// The packument is queried by name only; the license is read from the
/// version the `latest` dist-tag points at.
pub async fn fetch_license(client: &Client, component: &str) -> Result<Option<String>> {
    let response = client
        .get(lookup_url(component))
        .header("User-Agent", "sbom-reconcilr/0.1.0")
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        return Ok(None);
    }

    let data: serde_json::Value = response.json().await?;

    let latest = data
        .get("dist-tags")
        .and_then(|d| d.get("latest"))
        .and_then(|v| v.as_str());

    let license = match latest {
        Some(ver) => data
            .get("versions")
            .and_then(|vs| vs.get(ver))
            .and_then(|v| v.get("license"))
            .and_then(|l| l.as_str())
            .map(str::to_string),
        None => None,
    };

    Ok(license)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_url_encodes_scoped_packages() {
        assert_eq!(lookup_url("left-pad"), "https://registry.npmjs.org/left-pad");
        assert_eq!(
            lookup_url("@babel/core"),
            "https://registry.npmjs.org/%40babel%2Fcore"
        );
    }
}
