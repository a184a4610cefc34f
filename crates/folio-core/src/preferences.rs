//! Key/value preference storage.
//!
//! Mirrors the browser's local storage contract: string keys, string
//! values, synchronous access. Two backends are provided:
//!
//! - [`InMemoryPreferenceStore`]: process-local, used for tests and as the
//!   fallback when the file store cannot be opened
//! - [`FilePreferenceStore`]: a JSON object persisted in the data directory
//!
//! [`Preferences`] wraps a store and absorbs every storage error, so the
//! page keeps working with in-memory values when storage is unavailable.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::theme::Theme;

/// Storage key for the theme preference (`"light"` or `"dark"`).
pub const THEME_KEY: &str = "theme";

/// Storage key for the sound preference (`"true"` or `"false"`).
pub const SOUND_KEY: &str = "soundEnabled";

/// File name used by [`FilePreferenceStore::in_dir`].
pub const PREFERENCES_FILE: &str = "preferences.json";

/// A synchronous string key/value store.
pub trait PreferenceStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store; nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store holding a single flat JSON object.
///
/// The file is read once on open; every `set` rewrites it through a
/// temporary file and rename so a crash never leaves half a document.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FilePreferenceStore {
    /// Open the store at `path`, creating nothing until the first write.
    ///
    /// A file that exists but cannot be parsed is reported as an error so
    /// the caller can decide whether to fall back.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), keys = entries.len(), "Opened preference store");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Open `preferences.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::open(dir.as_ref().join(PREFERENCES_FILE))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let encoded = serde_json::to_vec_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, encoded)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock();
        let previous = entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush(&entries) {
            // Keep memory and disk in agreement
            match previous {
                Some(old) => entries.insert(key.to_string(), old),
                None => entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}

/// Typed, error-absorbing access to the page's two preferences.
#[derive(Clone)]
pub struct Preferences {
    store: Arc<dyn PreferenceStore>,
}

impl std::fmt::Debug for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences").finish_non_exhaustive()
    }
}

impl PartialEq for Preferences {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }
}

impl Preferences {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Preferences backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryPreferenceStore::new()))
    }

    /// Open the file store in `dir`, degrading to memory if that fails.
    pub fn open_or_in_memory(dir: impl AsRef<Path>) -> Self {
        match FilePreferenceStore::in_dir(dir.as_ref()) {
            Ok(store) => Self::new(Arc::new(store)),
            Err(e) => {
                warn!(
                    error = %e,
                    dir = %dir.as_ref().display(),
                    "Preference storage unavailable, keeping preferences in memory"
                );
                Self::in_memory()
            }
        }
    }

    /// Read a raw value; storage errors read as absent.
    pub fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, key, "Failed to read preference");
                None
            }
        }
    }

    /// Write a raw value; returns whether it reached storage.
    pub fn write(&self, key: &str, value: &str) -> bool {
        match self.store.set(key, value) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, key, "Failed to persist preference");
                false
            }
        }
    }

    /// Stored theme, or `None` when absent or unrecognised.
    pub fn theme(&self) -> Option<Theme> {
        let raw = self.read(THEME_KEY)?;
        let theme = Theme::parse(&raw);
        if theme.is_none() {
            warn!(value = %raw, "Ignoring unrecognised stored theme");
        }
        theme
    }

    pub fn set_theme(&self, theme: Theme) -> bool {
        self.write(THEME_KEY, theme.attribute_value())
    }

    /// Stored sound flag; anything other than `"true"` means disabled.
    pub fn sound_enabled(&self) -> bool {
        self.read(SOUND_KEY).as_deref() == Some("true")
    }

    pub fn set_sound_enabled(&self, enabled: bool) -> bool {
        self.write(SOUND_KEY, if enabled { "true" } else { "false" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store that fails every operation, like a sandboxed webview.
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("disabled".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disabled".into()))
        }
    }

    #[test]
    fn test_in_memory_roundtrip() {
        let store = InMemoryPreferenceStore::new();
        assert!(store.is_empty());
        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_file_store_persists_across_open() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FilePreferenceStore::in_dir(dir.path()).unwrap();
            store.set(THEME_KEY, "dark").unwrap();
            store.set(SOUND_KEY, "true").unwrap();
        }
        let reopened = FilePreferenceStore::in_dir(dir.path()).unwrap();
        assert_eq!(reopened.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get(SOUND_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::in_dir(dir.path().join("nested")).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PREFERENCES_FILE), "{not json").unwrap();
        let result = FilePreferenceStore::in_dir(dir.path());
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }

    #[test]
    fn test_open_or_in_memory_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PREFERENCES_FILE), "[1, 2").unwrap();
        let prefs = Preferences::open_or_in_memory(dir.path());
        assert!(prefs.set_theme(Theme::Dark));
        assert_eq!(prefs.theme(), Some(Theme::Dark));
    }

    #[test]
    fn test_broken_store_degrades_to_defaults() {
        let prefs = Preferences::new(Arc::new(BrokenStore));
        assert_eq!(prefs.theme(), None);
        assert!(!prefs.sound_enabled());
        assert!(!prefs.set_theme(Theme::Dark));
        assert!(!prefs.set_sound_enabled(true));
    }

    #[test]
    fn test_unknown_theme_value_reads_as_absent() {
        let prefs = Preferences::in_memory();
        prefs.write(THEME_KEY, "sepia");
        assert_eq!(prefs.theme(), None);
    }

    #[test]
    fn test_sound_flag_strings() {
        let prefs = Preferences::in_memory();
        assert!(!prefs.sound_enabled());
        prefs.set_sound_enabled(true);
        assert_eq!(prefs.read(SOUND_KEY).as_deref(), Some("true"));
        assert!(prefs.sound_enabled());
        prefs.set_sound_enabled(false);
        assert_eq!(prefs.read(SOUND_KEY).as_deref(), Some("false"));
    }
}
