use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use super::loader::{load_file, LoadError};
use super::model::Dataset;

// ---------------------------------------------------------------------------
// Memoized loading
// ---------------------------------------------------------------------------

/// Load-once table keyed by source identity (the canonical file path).
///
/// Entries are inserted exactly once and never replaced, so every caller that
/// asks for the same file gets the same `Arc<Dataset>`.  Failed loads are not
/// cached.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: Mutex<HashMap<PathBuf, Arc<Dataset>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by [`load`].
    pub fn global() -> &'static DatasetCache {
        static GLOBAL: OnceLock<DatasetCache> = OnceLock::new();
        GLOBAL.get_or_init(DatasetCache::new)
    }

    /// Return the cached dataset for `path`, reading the file on first use.
    pub fn get_or_load(&self, path: &Path) -> Result<Arc<Dataset>, LoadError> {
        let key = source_key(path);
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(dataset) = entries.get(&key) {
            log::debug!("Dataset cache hit for {}", key.display());
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(load_file(path)?);
        entries.insert(key, Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Number of distinct sources loaded so far.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Load a dataset through the process-wide cache.
pub fn load(path: &Path) -> Result<Arc<Dataset>, LoadError> {
    DatasetCache::global().get_or_load(path)
}

/// `./a.csv` and `a.csv` are the same source; fall back to the path as given
/// when it cannot be resolved (the loader reports the real error).
fn source_key(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "platform,content_type,year,date,campaign_name,post_hour,likes,comments,shares,engagement,engagement_rate,ad_spend,roi\n\
                       X,Image,2023,2023-06-01,,14,1,1,1,3,0.5,10,0.0\n";

    #[test]
    fn repeated_loads_return_the_same_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.csv");
        std::fs::write(&path, CSV).unwrap();

        let cache = DatasetCache::new();
        let first = cache.get_or_load(&path).unwrap();

        // Rewriting the file must not be observed: the source is read once.
        std::fs::write(&path, "garbage").unwrap();
        let second = cache.get_or_load(&path).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn equivalent_paths_share_one_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.csv");
        std::fs::write(&path, CSV).unwrap();
        let dotted = dir.path().join(".").join("posts.csv");

        let cache = DatasetCache::new();
        let a = cache.get_or_load(&path).unwrap();
        let b = cache.get_or_load(&dotted).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn failed_loads_are_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("late.csv");

        let cache = DatasetCache::new();
        assert!(cache.get_or_load(&path).is_err());
        assert_eq!(cache.len(), 0);

        std::fs::write(&path, CSV).unwrap();
        assert_eq!(cache.get_or_load(&path).unwrap().len(), 1);
    }
}
