//! Directory-backed stub repository.
//!
//! Loads `<stub-id>.stub` files from a user-provided directory, for
//! projects that override the built-in templates.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crudgen_core::application::ports::{StubId, StubRepository};
use crudgen_core::application::ApplicationError;
use crudgen_core::error::CrudgenResult;

/// [`StubRepository`] reading stubs from a directory.
#[derive(Debug, Clone)]
pub struct DirectoryStubs {
    dir: PathBuf,
}

impl DirectoryStubs {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// All `.stub` files under the directory, sorted. Diagnostic aid for
    /// the "stub not found" path.
    pub fn available(&self) -> Vec<PathBuf> {
        let mut found: Vec<PathBuf> = WalkDir::new(&self.dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "stub"))
            .collect();
        found.sort();
        found
    }
}

impl StubRepository for DirectoryStubs {
    fn load(&self, stub: StubId) -> CrudgenResult<String> {
        let path = self.dir.join(stub.file_name());
        match fs::read_to_string(&path) {
            Ok(text) => {
                debug!(path = %path.display(), "stub loaded");
                Ok(text)
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    available = ?self.available(),
                    "stub load failed"
                );
                Err(ApplicationError::StubNotFound { stub }.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn loads_a_stub_by_file_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("controller.stub"), "class {{ className }}").unwrap();

        let stubs = DirectoryStubs::new(dir.path());
        assert_eq!(
            stubs.load(StubId::Controller).unwrap(),
            "class {{ className }}"
        );
    }

    #[test]
    fn missing_stub_is_stub_not_found() {
        let dir = TempDir::new().unwrap();
        let stubs = DirectoryStubs::new(dir.path());
        let err = stubs.load(StubId::Request).unwrap_err();
        assert!(err.to_string().contains("request.stub"));
    }

    #[test]
    fn available_lists_stub_files_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("controller.stub"), "a").unwrap();
        fs::write(dir.path().join("notes.txt"), "b").unwrap();

        let stubs = DirectoryStubs::new(dir.path());
        let available = stubs.available();
        assert_eq!(available.len(), 1);
        assert!(available[0].ends_with("controller.stub"));
    }
}
