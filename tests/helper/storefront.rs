//! Storefront server and preference store fixtures

use std::sync::Arc;

use mockito::{Matcher, Mock, ServerGuard};
use tempfile::TempDir;

use store_update_check::version::preferences::{PreferenceStore, SqlitePreferences};

pub const BUNDLE_ID: &str = "com.example.app";

/// Lookup response body listing a single release
pub fn lookup_body(version: &str, track_view_url: &str) -> String {
    serde_json::json!({
        "resultCount": 1,
        "results": [{
            "bundleId": BUNDLE_ID,
            "version": version,
            "trackViewUrl": track_view_url,
        }]
    })
    .to_string()
}

/// Mock the lookup endpoint for [`BUNDLE_ID`]
pub async fn mock_lookup(server: &mut ServerGuard, status: usize, body: &str) -> Mock {
    server
        .mock("GET", "/lookup")
        .match_query(Matcher::UrlEncoded("bundleId".into(), BUNDLE_ID.into()))
        .with_status(status)
        .with_header("content-type", "text/javascript; charset=utf-8")
        .with_body(body)
        .create_async()
        .await
}

/// Create a SQLite preference store in a temp dir, optionally pre-seeded
pub fn create_test_preferences(skipped: Option<&str>) -> (TempDir, Arc<SqlitePreferences>) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("preferences.db");
    let preferences = SqlitePreferences::new(&db_path).unwrap();

    if let Some(version) = skipped {
        preferences.set_skipped_version(version).unwrap();
    }

    (temp_dir, Arc::new(preferences))
}
