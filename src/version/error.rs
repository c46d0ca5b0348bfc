use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Preference store lock poisoned")]
    LockPoisoned,
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid lookup URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Storefront returned status {0}")]
    UnexpectedStatus(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("No listing found for {0}")]
    NoResults(String),

    #[error("Listing for {0} has no version")]
    MissingVersion(String),
}
