//! In-memory filesystem fake for tests and dry runs.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crudgen_core::application::ports::Filesystem;
use crudgen_core::application::ApplicationError;
use crudgen_core::error::CrudgenResult;

#[derive(Debug, Default)]
struct Store {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
}

/// Thread-safe in-memory [`Filesystem`].
///
/// Cloning shares the underlying store, so a test can keep a handle for
/// assertions after moving a clone into a service.
#[derive(Debug, Default, Clone)]
pub struct MemoryFilesystem {
    store: Arc<RwLock<Store>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test helper: read a file without going through the port.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.store
            .read()
            .ok()?
            .files
            .get(path.as_ref())
            .cloned()
    }

    /// Test helper: all file paths currently stored, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.store
            .read()
            .map(|s| s.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn file_count(&self) -> usize {
        self.store.read().map(|s| s.files.len()).unwrap_or(0)
    }
}

impl Filesystem for MemoryFilesystem {
    fn ensure_dir(&self, path: &Path) -> CrudgenResult<()> {
        let mut store = self
            .store
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            store.dirs.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CrudgenResult<()> {
        let mut store = self
            .store
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        store.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> CrudgenResult<String> {
        let store = self
            .store
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        store
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "file not found".into(),
                }
                .into()
            })
    }

    fn exists(&self, path: &Path) -> bool {
        self.store
            .read()
            .map(|s| s.files.contains_key(path) || s.dirs.contains(path))
            .unwrap_or(false)
    }
}
