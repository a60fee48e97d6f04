use crate::api_model::Item;
use crate::error::Result;
use log::warn;
use std::fs;
use std::fs::create_dir_all;
use std::path::PathBuf;
use std::sync::RwLock;

/// Persistence for the full item collection.
/// Implementations read and write the collection as one document,
/// there are no partial updates and no locking around writes:
/// with overlapping requests the last `save` wins.
pub trait ItemStore: Send + Sync {
    /// Return the current collection.
    /// A missing, unreadable or malformed backing file yields an empty
    /// collection rather than an error.
    fn load(&self) -> Vec<Item>;

    /// Overwrite the backing storage with the given collection.
    fn save(&self, items: &[Item]) -> Result<()>;
}

/// `ItemStore` backed by a single JSON file on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> FileStore {
        FileStore { path: path.into() }
    }
}

impl ItemStore for FileStore {
    fn load(&self) -> Vec<Item> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_slice(&data) {
            Ok(items) => items,
            Err(err) => {
                warn!(
                    "Failed to parse items file {}, treating it as empty, {}",
                    self.path.display(),
                    err
                );
                Vec::new()
            }
        }
    }

    fn save(&self, items: &[Item]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            create_dir_all(dir)?;
        }
        let json = serde_json::to_vec_pretty(items)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory `ItemStore`, substituted for the file-backed one in tests.
pub struct MemoryStore {
    items: RwLock<Vec<Item>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore {
            items: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> MemoryStore {
        MemoryStore::new()
    }
}

impl ItemStore for MemoryStore {
    fn load(&self) -> Vec<Item> {
        match self.items.read() {
            Ok(items) => items.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn save(&self, items: &[Item]) -> Result<()> {
        let mut guard = self.items.write()?;
        *guard = items.to_vec();
        Ok(())
    }
}
