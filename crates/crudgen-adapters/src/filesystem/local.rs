//! Local filesystem adapter backed by `std::fs`.

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crudgen_core::application::ports::Filesystem;
use crudgen_core::application::ApplicationError;
use crudgen_core::error::CrudgenResult;

/// Production [`Filesystem`] implementation.
///
/// Stateless; every call goes straight to the OS.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn ensure_dir(&self, path: &Path) -> CrudgenResult<()> {
        trace!(path = %path.display(), "ensure_dir");
        fs::create_dir_all(path).map_err(|e| ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CrudgenResult<()> {
        debug!(path = %path.display(), bytes = content.len(), "write_file");
        fs::write(path, content).map_err(|e| ApplicationError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> CrudgenResult<String> {
        trace!(path = %path.display(), "read_to_string");
        let content = fs::read_to_string(path).map_err(|e| ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
