//! App Store lookup client for fetching the published app version

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::config::DEFAULT_LOOKUP_BASE_URL;
use crate::version::error::LookupError;
use crate::version::lookup::StorefrontLookup;
use crate::version::types::StoreRelease;

/// App Store lookup client
pub struct AppStoreLookup {
    client: Client,
    base_url: String,
    country: Option<String>,
}

impl Default for AppStoreLookup {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKUP_BASE_URL.to_string())
    }
}

impl AppStoreLookup {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            country: None,
        }
    }

    /// Restricts the lookup to a single storefront country (e.g. "us")
    pub fn with_country(mut self, country: Option<String>) -> Self {
        self.country = country;
        self
    }

    fn lookup_url(&self, bundle_id: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&format!(
            "{}/lookup",
            self.base_url.trim_end_matches('/')
        ))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("bundleId", bundle_id);
            if let Some(country) = &self.country {
                query.append_pair("country", country);
            }
        }
        Ok(url)
    }
}

/// Lookup API response envelope
#[derive(Debug, Deserialize)]
struct LookupResponse {
    results: Vec<LookupResult>,
}

/// A single listing; the API sends many more fields than these
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupResult {
    version: Option<String>,
    track_view_url: Option<String>,
}

/// Extracts the first listing's version from a lookup response body
fn parse_release(bundle_id: &str, body: &[u8]) -> Result<StoreRelease, LookupError> {
    let response: LookupResponse =
        serde_json::from_slice(body).map_err(|e| LookupError::InvalidResponse(e.to_string()))?;

    let first = response
        .results
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::NoResults(bundle_id.to_string()))?;

    let version = first
        .version
        .ok_or_else(|| LookupError::MissingVersion(bundle_id.to_string()))?;

    Ok(StoreRelease {
        version,
        store_url: first.track_view_url,
    })
}

#[async_trait]
impl StorefrontLookup for AppStoreLookup {
    async fn lookup_release(&self, bundle_id: &str) -> Result<StoreRelease, LookupError> {
        let url = self.lookup_url(bundle_id)?;
        debug!("Fetching storefront listing: {}", url);

        let response = self.client.get(url).send().await?;

        // Anything but a plain 200 is treated as unusable, redirects included
        if response.status() != StatusCode::OK {
            return Err(LookupError::UnexpectedStatus(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        let release = parse_release(bundle_id, &body)?;

        debug!(
            "Storefront reports version {} for {}",
            release.version, bundle_id
        );

        Ok(release)
    }
}
