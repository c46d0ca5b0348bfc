//! Shared test utilities

pub mod prompt;
pub mod storefront;

pub use prompt::{RecordingOpener, ScriptedPresenter};
pub use storefront::{BUNDLE_ID, create_test_preferences, lookup_body, mock_lookup};
