//! Disk-backed HTTP response cache
//!
//! Responses are stored one file per URL under the cache directory, keyed
//! by the SHA-256 of the URL. Entries never expire; `clear` removes every
//! stored response (the `--clear-cache` flag).

use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File-per-URL response cache
#[derive(Debug, Clone)]
pub struct ResponseCache {
    dir: PathBuf,
}

impl ResponseCache {
    /// Opens a cache rooted at `dir`, creating the directory if needed
    pub fn open(dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn entry_path(&self, url: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        self.dir.join(hex::encode(hasher.finalize()))
    }

    /// Returns the cached body for `url`, if present
    pub fn load(&self, url: &str) -> Option<String> {
        fs::read_to_string(self.entry_path(url)).ok()
    }

    /// Stores `body` as the cached response for `url`
    pub fn store(&self, url: &str, body: &str) -> io::Result<()> {
        fs::write(self.entry_path(url), body)
    }

    /// Removes every cached response
    pub fn clear(&self) -> io::Result<()> {
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                fs::remove_file(entry.path())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_store_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let cache = ResponseCache::open(dir.path()).unwrap();

        cache.store("https://example.com/a", "<html>a</html>").unwrap();
        assert_eq!(
            cache.load("https://example.com/a").as_deref(),
            Some("<html>a</html>")
        );
    }

    #[test]
    fn test_miss_is_none() {
        let dir = TempDir::new().unwrap();
        let cache = ResponseCache::open(dir.path()).unwrap();
        assert!(cache.load("https://example.com/missing").is_none());
    }

    #[test]
    fn test_distinct_urls_distinct_entries() {
        let dir = TempDir::new().unwrap();
        let cache = ResponseCache::open(dir.path()).unwrap();

        cache.store("https://example.com/a", "a").unwrap();
        cache.store("https://example.com/b", "b").unwrap();

        assert_eq!(cache.load("https://example.com/a").as_deref(), Some("a"));
        assert_eq!(cache.load("https://example.com/b").as_deref(), Some("b"));
    }

    #[test]
    fn test_clear_removes_everything() {
        let dir = TempDir::new().unwrap();
        let cache = ResponseCache::open(dir.path()).unwrap();

        cache.store("https://example.com/a", "a").unwrap();
        cache.store("https://example.com/b", "b").unwrap();
        cache.clear().unwrap();

        assert!(cache.load("https://example.com/a").is_none());
        assert!(cache.load("https://example.com/b").is_none());
    }

    #[test]
    fn test_open_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested").join("cache");
        let cache = ResponseCache::open(&nested).unwrap();
        cache.store("https://example.com/", "body").unwrap();
        assert!(nested.exists());
    }
}
