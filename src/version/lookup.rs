//! Lookup trait for fetching the published version from a storefront

#[cfg(test)]
use mockall::automock;

use crate::version::error::LookupError;
use crate::version::types::StoreRelease;

/// Trait for looking up an app listing in a storefront
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait StorefrontLookup: Send + Sync {
    /// Fetches the currently published release for an application
    ///
    /// # Arguments
    /// * `bundle_id` - The application identifier (e.g., "com.example.app")
    ///
    /// # Returns
    /// * `Ok(StoreRelease)` - The first listing's version
    /// * `Err(LookupError)` - If the fetch or the response is unusable
    async fn lookup_release(&self, bundle_id: &str) -> Result<StoreRelease, LookupError>;
}
