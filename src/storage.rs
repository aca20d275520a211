// File: ./src/storage.rs
// Key/value persistence for the item snapshot.
//
// The list keeps its whole state in a single slot of a small key/value file,
// the way a web page would use local storage. `FileStore` is the on-disk
// implementation, `MemoryStore` backs tests and throwaway sessions, and
// `SnapshotStore` is the adapter the repository talks to.
use crate::context::AppContext;
use crate::model::Item;
use crate::model::snapshot;
use anyhow::{Context, Result};
use fs2::FileExt;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// The single slot the snapshot lives in.
pub const STORAGE_KEY: &str = "ticklist_items";

pub trait KeyValueStore: std::fmt::Debug {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

// --- In-memory store ---

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one raw value, handy for load tests.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.slots.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- File store ---

/// A JSON object file mapping keys to string values.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens the store file named `file_name` inside the context's data dir.
    pub fn open(ctx: &dyn AppContext, file_name: &str) -> Result<Self> {
        Ok(Self::new(ctx.get_storage_path(file_name)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Helper to get a sidecar lock file path
    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.to_path_buf();
        if let Some(ext) = lock_path.extension() {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".lock");
            lock_path.set_extension(new_ext);
        } else {
            lock_path.set_extension("lock");
        }
        lock_path
    }

    /// Runs `f` while holding an exclusive lock on the sidecar lock file.
    fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::get_lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("Failed to open lock file {:?}", lock_path))?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Atomic write: Write to .tmp file then rename
    fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Raw file contents; `None` when the file is missing or empty.
    fn read_bytes(&self) -> Result<Option<Vec<u8>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&self.path).with_context(|| format!("Failed to read {:?}", self.path))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(Some(bytes))
    }

    fn parse_slots(&self, bytes: &[u8]) -> Result<BTreeMap<String, String>> {
        serde_json::from_slice(bytes).with_context(|| format!("Corrupt store file {:?}", self.path))
    }

    fn read_slots(&self) -> Result<BTreeMap<String, String>> {
        match self.read_bytes()? {
            Some(bytes) => self.parse_slots(&bytes),
            None => Ok(BTreeMap::new()),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Self::with_lock(&self.path, || Ok(self.read_slots()?.get(key).cloned()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        Self::with_lock(&self.path, || {
            // Only unparsable contents are replaced; read failures propagate.
            let mut slots = match self.read_bytes()? {
                Some(bytes) => self.parse_slots(&bytes).unwrap_or_else(|e| {
                    log::warn!("{:#}; rewriting it from scratch", e);
                    BTreeMap::new()
                }),
                None => BTreeMap::new(),
            };
            slots.insert(key.to_string(), value.to_string());
            let json = serde_json::to_string_pretty(&slots)?;
            Self::atomic_write(&self.path, json)
        })
    }
}

// --- Snapshot adapter ---

/// Reads and writes the item snapshot under [`STORAGE_KEY`].
///
/// Saving is fire-and-forget: a failed write is logged and otherwise ignored,
/// the in-memory list stays authoritative.
#[derive(Debug)]
pub struct SnapshotStore {
    backend: Box<dyn KeyValueStore>,
}

impl SnapshotStore {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    pub fn save(&mut self, items: &[Item]) {
        let result = snapshot::encode(items).and_then(|json| self.backend.set(STORAGE_KEY, &json));
        if let Err(e) = result {
            log::error!("Failed to save items: {:#}", e);
        }
    }

    pub fn load_raw(&self) -> Option<String> {
        match self.backend.get(STORAGE_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Failed to read saved items: {:#}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;
    use crate::model::ItemId;

    #[test]
    fn test_file_store_missing_file_reads_none() {
        let ctx = TestContext::new();
        let store = FileStore::open(&ctx, "storage.json").unwrap();
        assert_eq!(store.get(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let ctx = TestContext::new();
        let mut store = FileStore::open(&ctx, "storage.json").unwrap();
        store.set(STORAGE_KEY, "[]").unwrap();
        store.set("other", "kept").unwrap();

        let reopened = FileStore::open(&ctx, "storage.json").unwrap();
        assert_eq!(reopened.get(STORAGE_KEY).unwrap().as_deref(), Some("[]"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("kept"));
        assert!(!reopened.path().with_extension("tmp").exists());
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let ctx = TestContext::new();
        let mut store = FileStore::open(&ctx, "storage.json").unwrap();
        fs::write(store.path(), "{ not json").unwrap();

        assert!(store.get(STORAGE_KEY).is_err());

        // A write replaces the unreadable file instead of failing forever.
        store.set(STORAGE_KEY, "[]").unwrap();
        assert_eq!(store.get(STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_read_failure_is_not_overwritten() {
        let ctx = TestContext::new();
        let mut store = FileStore::open(&ctx, "storage.json").unwrap();
        fs::create_dir(store.path()).unwrap();
        fs::write(store.path().join("keep.txt"), "precious").unwrap();

        assert!(store.set(STORAGE_KEY, "[]").is_err());
        assert!(!store.path().with_extension("tmp").exists());
        assert!(store.path().join("keep.txt").exists());
    }

    #[test]
    fn test_snapshot_store_round_trip() {
        let mut snapshots = SnapshotStore::in_memory();
        assert_eq!(snapshots.load_raw(), None);

        let mut item = Item::new(ItemId::from("7"), "buy milk");
        item.completed = true;
        snapshots.save(&[item]);

        assert_eq!(
            snapshots.load_raw().as_deref(),
            Some(r#"[{"id":"7","text":"buy milk","completed":true}]"#)
        );
    }

    #[test]
    fn test_snapshot_store_read_error_is_none() {
        let ctx = TestContext::new();
        let store = FileStore::open(&ctx, "storage.json").unwrap();
        fs::write(store.path(), "garbage").unwrap();

        let snapshots = SnapshotStore::new(Box::new(store));
        assert_eq!(snapshots.load_raw(), None);
    }
}
