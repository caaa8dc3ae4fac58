//! Content-addressed release cache.
//!
//! Parsing is a pure function of the source bytes, so releases are memoized by
//! the SHA-256 of those bytes. Entries are shared as `Arc<ReleaseConfig>`;
//! failed parses are never cached.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

use crosstool_model::ReleaseConfig;
use sha2::{Digest as _, Sha256};
use tracing::debug;

use crate::error::{ParseError, Result};

/// SHA-256 digest of a release's source bytes.
type SourceDigest = [u8; 32];

fn digest(bytes: &[u8]) -> SourceDigest {
    Sha256::digest(bytes).into()
}

/// Short hex prefix of a digest, for log lines.
fn short_hex(key: &SourceDigest) -> String {
    key[..6].iter().map(|b| format!("{b:02x}")).collect()
}

/// Thread-safe memo of parsed releases.
#[derive(Debug, Default)]
pub struct ReleaseCache {
    entries: RwLock<HashMap<SourceDigest, Arc<ReleaseConfig>>>,
}

impl ReleaseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached release for `bytes`, parsing on first use.
    pub fn get_or_parse(&self, source_id: &str, bytes: &[u8]) -> Result<Arc<ReleaseConfig>> {
        let key = digest(bytes);
        if let Some(release) = self.read_entries().get(&key) {
            debug!(source = source_id, digest = %short_hex(&key), "release cache hit");
            return Ok(Arc::clone(release));
        }

        let release = Arc::new(crate::parse(source_id, bytes)?);
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // Another thread may have parsed the same bytes meanwhile; keep the first.
        let cached = entries.entry(key).or_insert(release);
        Ok(Arc::clone(cached))
    }

    /// Read a file and go through [`ReleaseCache::get_or_parse`].
    pub fn get_or_parse_file(&self, path: &Path) -> Result<Arc<ReleaseConfig>> {
        let bytes = std::fs::read(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.get_or_parse(&path.display().to_string(), &bytes)
    }

    /// Number of cached releases.
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_entries(&self) -> std::sync::RwLockReadGuard<'_, HashMap<SourceDigest, Arc<ReleaseConfig>>> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
