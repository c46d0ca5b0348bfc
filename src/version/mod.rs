//! Version lookup layer for storefront update checks
//!
//! This module fetches the published version of an app from a storefront,
//! compares it with the installed and skipped versions, and persists the
//! user's "skip this version" choice.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Fetcher   │────▶│   Checker   │◀────│ Preferences │
//! │ (one-shot)  │     │  (compare)  │     │  (skipped)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  Lookups    │
//! │ (App Store) │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Textual three-way comparison deciding whether to prompt
//! - [`error`]: Error types for lookups and preference storage
//! - [`fetcher`]: Single-flight fetch where a new request cancels the previous
//! - [`lookup`]: Trait for querying a storefront
//! - [`preferences`]: SQLite and in-memory skipped-version stores
//! - [`registries`]: Concrete storefront clients
//! - [`types`]: Common types like `StoreRelease`

pub mod checker;
pub mod error;
pub mod fetcher;
pub mod lookup;
pub mod preferences;
pub mod registries;
pub mod types;
