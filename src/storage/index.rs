//! Directory index
//!
//! In-memory, case-insensitive set of the regular file names inside one
//! managed directory. Mutations go to the filesystem first and only touch the
//! set once the filesystem call has succeeded.

use log::{debug, error, info, warn};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::filesystem;
use super::name::FileName;
use super::pattern::GlobPattern;
use super::results::IndexStats;
use crate::error::{FileAction, IndexError};

/// How `delete`, `search` and `search_by_pattern` compare a requested name
/// with stored names. `add` always treats names differing only by case as
/// duplicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameLookup {
    /// "A.txt" and "a.txt" refer to the same entry.
    #[default]
    CaseInsensitive,
    /// The requested name must equal the stored spelling exactly.
    Exact,
}

#[derive(Debug)]
pub struct DirectoryIndex {
    root: PathBuf,
    names: BTreeSet<FileName>,
    lookup: NameLookup,
}

impl DirectoryIndex {
    /// Builds an index over `root` and scans it.
    ///
    /// A missing or unreadable directory leaves the index empty and logs a
    /// warning; call [`DirectoryIndex::refresh`] to retry and inspect the
    /// error.
    pub fn open(root: impl Into<PathBuf>, lookup: NameLookup) -> Self {
        let root = root.into();
        let root = std::path::absolute(&root).unwrap_or(root);

        let mut index = Self {
            root,
            names: BTreeSet::new(),
            lookup,
        };
        index.refresh();
        index
    }

    /// Discards the in-memory set and rebuilds it from the directory.
    ///
    /// Returns the scan error, if any, after logging it. The set is empty in
    /// that case.
    pub fn refresh(&mut self) -> Option<IndexError> {
        self.names.clear();

        match filesystem::list_regular_files(&self.root) {
            Ok(names) => {
                self.names.extend(names.into_iter().map(FileName::new));
                info!(
                    "Indexed {} file(s) in {}",
                    self.names.len(),
                    self.root.display()
                );
                None
            }
            Err(source) => {
                let err = IndexError::Scan {
                    root: self.root.clone(),
                    source,
                };
                warn!("{}", err);
                Some(err)
            }
        }
    }

    /// Creates an empty file called `name` and records it.
    ///
    /// Returns `Ok(false)` without touching the filesystem when a name equal
    /// ignoring case is already indexed.
    pub fn add(&mut self, name: &str) -> Result<bool, IndexError> {
        let name = require_name(name)?;
        let key = FileName::new(name);

        if self.names.contains(&key) {
            debug!("'{}' already indexed, not creating", name);
            return Ok(false);
        }

        let path = self.root.join(name);
        filesystem::create_empty_file(&path)
            .map_err(|source| self.io_error(FileAction::Create, name, source))?;

        info!("Created {}", path.display());
        self.names.insert(key);
        Ok(true)
    }

    /// Removes `name` from the index and deletes the file if it still exists.
    ///
    /// Returns `Ok(false)` without touching the filesystem when `name` is not
    /// indexed.
    pub fn delete(&mut self, name: &str) -> Result<bool, IndexError> {
        let name = require_name(name)?;

        let Some(stored) = self.find(name).cloned() else {
            debug!("'{}' not indexed, nothing to delete", name);
            return Ok(false);
        };

        let path = self.root.join(stored.as_str());
        match filesystem::remove_file(&path) {
            Ok(()) => info!("Deleted {}", path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => warn!(
                "{} vanished outside the index, dropping the entry",
                path.display()
            ),
            Err(source) => return Err(self.io_error(FileAction::Delete, stored.as_str(), source)),
        }

        self.names.remove(&stored);
        Ok(true)
    }

    /// Returns true when `name` is indexed. Never touches the filesystem.
    pub fn search(&self, name: &str) -> bool {
        let name = name.trim();
        !name.is_empty() && self.find(name).is_some()
    }

    /// Indexed names matching a `*`/`?` glob, in case-insensitive order.
    pub fn search_by_pattern(&self, glob: &str) -> Vec<String> {
        // blank means "no pattern"; otherwise surrounding spaces are literal
        if glob.trim().is_empty() {
            return Vec::new();
        }

        let pattern = match GlobPattern::new(glob, self.lookup == NameLookup::CaseInsensitive) {
            Ok(pattern) => pattern,
            Err(e) => {
                warn!("Unusable pattern '{}': {}", glob, e);
                return Vec::new();
            }
        };

        self.names
            .iter()
            .filter(|name| pattern.is_match(name.as_str()))
            .map(|name| name.as_str().to_string())
            .collect()
    }

    /// Snapshot of every indexed name in case-insensitive order.
    pub fn list(&self) -> Vec<String> {
        self.names.iter().map(|name| name.as_str().to_string()).collect()
    }

    pub fn count(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            total: self.names.len(),
            root: self.root.clone(),
            first: self.names.first().map(|name| name.as_str().to_string()),
            last: self.names.last().map(|name| name.as_str().to_string()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn find(&self, name: &str) -> Option<&FileName> {
        match self.lookup {
            NameLookup::CaseInsensitive => self.names.get(&FileName::new(name)),
            NameLookup::Exact => self.names.iter().find(|stored| stored.as_str() == name),
        }
    }

    fn io_error(&self, action: FileAction, name: &str, source: std::io::Error) -> IndexError {
        let err = IndexError::Io {
            action,
            name: name.to_string(),
            root: self.root.clone(),
            source,
        };
        error!("{}", err);
        err
    }
}

fn require_name(name: &str) -> Result<&str, IndexError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(IndexError::InvalidArgument(
            "file name cannot be empty".into(),
        ));
    }
    Ok(name)
}
