use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::error::DataError;
use super::loader;
use super::model::Recording;

// ---------------------------------------------------------------------------
// Recording cache
// ---------------------------------------------------------------------------

/// Per-path memoized recordings. A file is parsed once per process; there
/// is no invalidation, so a file edited on disk keeps serving its stale
/// parse until restart. Recordings are fixed acquisitions, so re-parsing
/// them during a session would only cost time.
///
/// Failed loads are not cached: the next interaction retries from disk.
#[derive(Debug, Default)]
pub struct RecordingCache {
    entries: HashMap<PathBuf, Arc<Recording>>,
}

impl RecordingCache {
    /// Cached load; parses the file on first call per exact path.
    pub fn load(&mut self, path: &Path) -> Result<Arc<Recording>, DataError> {
        if let Some(cached) = self.entries.get(path) {
            return Ok(Arc::clone(cached));
        }

        log::info!("loading recording {}", path.display());
        let recording = Arc::new(loader::load_recording(path)?);
        self.entries
            .insert(path.to_path_buf(), Arc::clone(&recording));
        Ok(recording)
    }

    /// Number of distinct recordings parsed so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SAMPLE_COUNT;
    use crate::data::testutil::write_recording_csv;

    #[test]
    fn repeated_loads_share_one_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_recording_csv(dir.path(), "run1.csv", SAMPLE_COUNT);

        let mut cache = RecordingCache::default();
        let first = cache.load(&path).unwrap();
        let second = cache.load(&path).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cached_recording_survives_file_deletion() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_recording_csv(dir.path(), "run1.csv", SAMPLE_COUNT);

        let mut cache = RecordingCache::default();
        let first = cache.load(&path).unwrap();

        // The memo answers even after the file is gone, proving the second
        // call never touched the filesystem.
        std::fs::remove_file(&path).unwrap();
        let second = cache.load(&path).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn failed_loads_are_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run1.csv");

        let mut cache = RecordingCache::default();
        assert!(matches!(
            cache.load(&path).unwrap_err(),
            DataError::FileNotFound(_)
        ));
        assert!(cache.is_empty());

        // Retry succeeds once the file appears.
        write_recording_csv(dir.path(), "run1.csv", SAMPLE_COUNT);
        assert!(cache.load(&path).is_ok());
    }
}
