//! Single-flight storefront fetch where a newer request supersedes the older

use std::sync::{Arc, Mutex};

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::version::error::LookupError;
use crate::version::lookup::StorefrontLookup;
use crate::version::types::StoreRelease;

/// Fetches the published release, holding at most one request in flight
pub struct VersionFetcher {
    lookup: Arc<dyn StorefrontLookup>,
    in_flight: Mutex<CancellationToken>,
}

impl VersionFetcher {
    pub fn new(lookup: Arc<dyn StorefrontLookup>) -> Self {
        Self {
            lookup,
            in_flight: Mutex::new(CancellationToken::new()),
        }
    }

    /// Cancels the outstanding fetch, if any, and hands out the token for a new one
    fn supersede(&self) -> CancellationToken {
        let token = CancellationToken::new();
        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        in_flight.cancel();
        *in_flight = token.clone();
        token
    }

    /// Fetch the latest release for `bundle_id`
    ///
    /// Every failure (network, status, malformed body) resolves to `None`, as
    /// does a fetch superseded by a later call before its result was used.
    pub async fn fetch(&self, bundle_id: &str) -> Option<StoreRelease> {
        let token = self.supersede();

        let result = tokio::select! {
            _ = token.cancelled() => {
                debug!("Fetch for {} superseded while in flight", bundle_id);
                return None;
            }
            result = self.lookup.lookup_release(bundle_id) => result,
        };

        if token.is_cancelled() {
            debug!("Discarding superseded result for {}", bundle_id);
            return None;
        }

        match result {
            Ok(release) => Some(release),
            Err(e @ (LookupError::NoResults(_) | LookupError::MissingVersion(_))) => {
                info!("No published version: {}", e);
                None
            }
            Err(e) => {
                warn!("Failed to look up {}: {}", bundle_id, e);
                None
            }
        }
    }

    /// Cancel the outstanding fetch without starting a new one
    pub fn cancel(&self) {
        let in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        in_flight.cancel();
    }
}
