//! Common types for storefront lookups

/// A published release as reported by the storefront
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreRelease {
    /// Version string, compared verbatim
    pub version: String,
    /// Detail page of the listing, when the storefront reports one
    pub store_url: Option<String>,
}

impl StoreRelease {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            store_url: None,
        }
    }

    pub fn with_store_url(version: impl Into<String>, store_url: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            store_url: Some(store_url.into()),
        }
    }
}
