use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::DataError;

// ---------------------------------------------------------------------------
// File catalog
// ---------------------------------------------------------------------------

/// List the entry names of a data directory, sorted lexicographically so
/// "first catalog entry" is deterministic across platforms. No filtering by
/// extension or validity; a bad pick surfaces later as a load error.
pub fn list_recordings(dir: &Path) -> Result<Vec<String>, DataError> {
    let read_dir = fs::read_dir(dir).map_err(|source| DataError::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| DataError::DirectoryAccess {
            path: dir.to_path_buf(),
            source,
        })?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Per-directory memoized catalog. A directory is enumerated once per
/// process; files added or removed afterwards are not seen until restart,
/// which is acceptable for a session over a fixed set of recordings.
#[derive(Debug, Default)]
pub struct CatalogCache {
    entries: HashMap<PathBuf, Vec<String>>,
}

impl CatalogCache {
    /// Cached directory listing; enumerates on first call per directory.
    pub fn list(&mut self, dir: &Path) -> Result<&[String], DataError> {
        use std::collections::hash_map::Entry;
        match self.entries.entry(dir.to_path_buf()) {
            Entry::Occupied(cached) => Ok(cached.into_mut()),
            Entry::Vacant(slot) => {
                let names = list_recordings(dir)?;
                log::info!("catalog: {} entries in {}", names.len(), dir.display());
                Ok(slot.insert(names))
            }
        }
    }
}
