//! Test utilities for contentlab
//!
//! Shared helpers used by the tests of every contentlab crate: temporary
//! directories kept inside the workspace, and sample record documents for
//! each built-in template.

pub mod fixtures;

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the project root
///
/// All test files end up in one gitignored location that is easy to clean
/// up by hand. The directory is removed when the returned `TempDir` drops.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or `.tmp/` (or the
/// subdirectory) cannot be created.
///
/// # Examples
///
/// ```rust
/// use contentlab_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("story.toml");
/// std::fs::write(&file_path, "title = \"Hello\"").unwrap();
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Write `content` to `dir/name`, creating parent directories
///
/// # Panics
///
/// Panics when the file cannot be written.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    std::fs::write(&path, content).expect("Failed to write fixture file");
    path
}
