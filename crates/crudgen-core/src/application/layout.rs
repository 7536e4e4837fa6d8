//! Output path conventions.
//!
//! Where each generated artifact lands relative to the project root, and
//! where the route registry lives. The defaults mirror a conventional
//! Laravel application tree; every path is overridable through CLI config.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory and file conventions for generated output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Root directory all artifact directories are relative to.
    pub base_path: PathBuf,
    /// Controllers directory, relative to `base_path`.
    pub controllers: PathBuf,
    /// Services directory, relative to `base_path`.
    pub services: PathBuf,
    /// Repository interfaces directory, relative to `base_path`.
    pub repository_contracts: PathBuf,
    /// Repository implementations directory, relative to `base_path`.
    pub repositories: PathBuf,
    /// Form-request classes directory, relative to `base_path`.
    pub requests: PathBuf,
    /// API-resource classes directory, relative to `base_path`.
    pub resources: PathBuf,
    /// Route registry file, relative to the project root (not `base_path`).
    pub routes_file: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("app"),
            controllers: PathBuf::from("Http/Controllers"),
            services: PathBuf::from("Services"),
            repository_contracts: PathBuf::from("Repositories/Contract"),
            repositories: PathBuf::from("Repositories/Eloquent"),
            requests: PathBuf::from("Http/Requests"),
            resources: PathBuf::from("Http/Resources"),
            routes_file: PathBuf::from("routes/api.php"),
        }
    }
}

impl Layout {
    /// Absolute form of an artifact directory: `root/base_path/dir/Resource`.
    ///
    /// Artifacts are grouped per resource inside each convention directory,
    /// e.g. `app/Http/Controllers/Project/ProjectController.php`.
    pub fn artifact_dir(&self, root: &Path, dir: &Path, resource_dir: &str) -> PathBuf {
        root.join(&self.base_path).join(dir).join(resource_dir)
    }

    /// Absolute path of the route registry file.
    pub fn routes_path(&self, root: &Path) -> PathBuf {
        root.join(&self.routes_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_conventions() {
        let layout = Layout::default();
        assert_eq!(layout.base_path, Path::new("app"));
        assert_eq!(layout.controllers, Path::new("Http/Controllers"));
        assert_eq!(layout.routes_file, Path::new("routes/api.php"));
    }

    #[test]
    fn artifact_dir_nests_resource_under_convention_dir() {
        let layout = Layout::default();
        let dir = layout.artifact_dir(Path::new("/proj"), &layout.controllers, "Project");
        assert_eq!(dir, Path::new("/proj/app/Http/Controllers/Project"));
    }

    #[test]
    fn routes_path_is_relative_to_root_not_base() {
        let layout = Layout::default();
        assert_eq!(
            layout.routes_path(Path::new("/proj")),
            Path::new("/proj/routes/api.php")
        );
    }
}
