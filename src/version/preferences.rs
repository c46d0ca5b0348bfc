//! Persistent storage for the skipped-version preference

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info};

#[cfg(test)]
use mockall::automock;

use crate::config::{DEFAULT_VERSION, SKIPPED_VERSION_KEY};
use crate::version::error::PreferenceError;

/// Trait for reading and writing the skipped-version preference
#[cfg_attr(test, automock)]
pub trait PreferenceStore: Send + Sync + 'static {
    /// Last version the user chose to skip, or [`DEFAULT_VERSION`] if none
    fn skipped_version(&self) -> Result<String, PreferenceError>;

    /// Overwrite the skipped version
    fn set_skipped_version(&self, version: &str) -> Result<(), PreferenceError>;
}

/// SQLite-backed key/value preference store
pub struct SqlitePreferences {
    conn: Mutex<Connection>,
}

impl SqlitePreferences {
    pub fn new(db_path: &Path) -> Result<Self, PreferenceError> {
        info!("Opening preference database at {:?}", db_path);

        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        let store = Self {
            conn: Mutex::new(conn),
        };

        store.create_schema()?;
        debug!("Preference database ready");

        Ok(store)
    }

    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>, PreferenceError> {
        self.conn.lock().map_err(|_| PreferenceError::LockPoisoned)
    }

    /// Get current timestamp in milliseconds since UNIX epoch
    fn current_timestamp_ms() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or_default()
    }

    fn create_schema(&self) -> Result<(), PreferenceError> {
        let conn = self.lock_conn()?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL DEFAULT 0
            )
            "#,
            [],
        )?;

        Ok(())
    }

    /// Read a raw preference value
    pub fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let conn = self.lock_conn()?;
        let value = conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Write a raw preference value, replacing any previous one
    pub fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let conn = self.lock_conn()?;
        conn.execute(
            r#"
            INSERT INTO preferences (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
            (key, value, Self::current_timestamp_ms()),
        )?;
        Ok(())
    }
}

impl PreferenceStore for SqlitePreferences {
    fn skipped_version(&self) -> Result<String, PreferenceError> {
        Ok(self
            .get(SKIPPED_VERSION_KEY)?
            .unwrap_or_else(|| DEFAULT_VERSION.to_string()))
    }

    fn set_skipped_version(&self, version: &str) -> Result<(), PreferenceError> {
        self.set(SKIPPED_VERSION_KEY, version)?;
        info!("Skipped version set to {}", version);
        Ok(())
    }
}

/// Preference store that lives only as long as the process
#[derive(Default)]
pub struct MemoryPreferences {
    skipped: Mutex<Option<String>>,
}

impl MemoryPreferences {
    pub fn with_skipped_version(version: &str) -> Self {
        Self {
            skipped: Mutex::new(Some(version.to_string())),
        }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn skipped_version(&self) -> Result<String, PreferenceError> {
        let skipped = self
            .skipped
            .lock()
            .map_err(|_| PreferenceError::LockPoisoned)?;
        Ok(skipped
            .clone()
            .unwrap_or_else(|| DEFAULT_VERSION.to_string()))
    }

    fn set_skipped_version(&self, version: &str) -> Result<(), PreferenceError> {
        let mut skipped = self
            .skipped
            .lock()
            .map_err(|_| PreferenceError::LockPoisoned)?;
        *skipped = Some(version.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn skipped_version_defaults_when_absent() {
        let temp_dir = TempDir::new().unwrap();
        let store = SqlitePreferences::new(&temp_dir.path().join("test.db")).unwrap();

        assert_eq!(store.skipped_version().unwrap(), DEFAULT_VERSION);
    }

    #[test]
    fn set_skipped_version_overwrites_previous_value() {
        let temp_dir = TempDir::new().unwrap();
        let store = SqlitePreferences::new(&temp_dir.path().join("test.db")).unwrap();

        store.set_skipped_version("2.1").unwrap();
        store.set_skipped_version("2.2").unwrap();

        assert_eq!(store.skipped_version().unwrap(), "2.2");

        let conn = store.lock_conn().unwrap();
        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM preferences", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn skipped_version_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        {
            let store = SqlitePreferences::new(&db_path).unwrap();
            store.set_skipped_version("3.0").unwrap();
        }

        let reopened = SqlitePreferences::new(&db_path).unwrap();
        assert_eq!(reopened.skipped_version().unwrap(), "3.0");
    }

    #[test]
    fn get_returns_none_for_unknown_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = SqlitePreferences::new(&temp_dir.path().join("test.db")).unwrap();

        assert_eq!(store.get("unknown").unwrap(), None);
    }

    #[test]
    fn set_records_update_timestamp() {
        let temp_dir = TempDir::new().unwrap();
        let store = SqlitePreferences::new(&temp_dir.path().join("test.db")).unwrap();

        store.set(SKIPPED_VERSION_KEY, "2.1").unwrap();

        let conn = store.lock_conn().unwrap();
        let updated_at: i64 = conn
            .query_row(
                "SELECT updated_at FROM preferences WHERE key = ?1",
                [SKIPPED_VERSION_KEY],
                |row| row.get(0),
            )
            .unwrap();
        assert!(updated_at > 0);
    }

    #[test]
    fn new_database_has_single_table_schema() {
        let temp_dir = TempDir::new().unwrap();
        let store = SqlitePreferences::new(&temp_dir.path().join("test.db")).unwrap();

        let conn = store.lock_conn().unwrap();
        let mut stmt = conn.prepare("PRAGMA table_info(preferences)").unwrap();
        let columns: Vec<String> = stmt
            .query_map([], |row| row.get(1))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(columns, vec!["key", "value", "updated_at"]);

        let user_version: i32 = conn
            .pragma_query_value(None, "user_version", |row| row.get(0))
            .unwrap();
        assert_eq!(user_version, 0);
    }

    #[test]
    fn memory_preferences_behave_like_sqlite() {
        let store = MemoryPreferences::default();
        assert_eq!(store.skipped_version().unwrap(), DEFAULT_VERSION);

        store.set_skipped_version("2.1").unwrap();
        assert_eq!(store.skipped_version().unwrap(), "2.1");
    }
}
