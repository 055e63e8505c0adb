//! File system operations
//!
//! Blocking primitives the directory index is built on.

use log::warn;
use std::fs::{self, OpenOptions};
use std::io::Result;
use std::path::Path;

/// Create a directory and any missing parents
pub fn create_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
}

/// Check if directory exists
pub fn directory_exists(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Create an empty regular file.
///
/// Fails if `path` already exists or its parent directory is missing.
pub fn create_empty_file(path: &Path) -> Result<()> {
    OpenOptions::new().write(true).create_new(true).open(path)?;
    Ok(())
}

/// Remove a regular file
pub fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path)
}

/// Names of the regular files directly inside `dir`, sorted by raw name.
///
/// Symlinks are followed. Subdirectories, entries that cannot be read and
/// entries whose names are not valid UTF-8 are skipped.
pub fn list_regular_files(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => warn!("Skipping non UTF-8 file name {:?} in {}", raw, dir.display()),
        }
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lists_only_regular_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.txt"), "").unwrap();
        fs::write(tmp.path().join("a.txt"), "x").unwrap();
        fs::create_dir(tmp.path().join("nested.dir")).unwrap();

        let names = list_regular_files(tmp.path()).unwrap();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn broken_entries_do_not_abort_listing() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("kept.txt"), "").unwrap();
        std::os::unix::fs::symlink(tmp.path().join("nowhere"), tmp.path().join("dangling.txt"))
            .unwrap();

        assert_eq!(list_regular_files(tmp.path()).unwrap(), vec!["kept.txt"]);
    }

    #[test]
    fn listing_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        assert!(list_regular_files(&tmp.path().join("absent")).is_err());
    }

    #[test]
    fn create_empty_file_refuses_to_overwrite() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("new.txt");

        create_empty_file(&path).unwrap();
        assert!(path.is_file());
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);

        let err = create_empty_file(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn create_empty_file_needs_parent() {
        let tmp = TempDir::new().unwrap();
        assert!(create_empty_file(&tmp.path().join("missing/new.txt")).is_err());
    }

    #[test]
    fn create_directory_is_recursive() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("one/two");
        create_directory(&dir).unwrap();
        assert!(directory_exists(&dir));
    }
}
