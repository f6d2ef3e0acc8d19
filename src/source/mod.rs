use std::{collections::HashMap, path::PathBuf, sync::Arc};

use anyhow::{anyhow, Result};

#[cfg(feature = "download")]
mod http;

#[cfg(feature = "download")]
pub use http::HttpSource;

/// Read-only access to viewer data files by source-relative path, e.g.
/// "counties.json", "06075_block_groups.geojson".
pub trait DataSource: Send + Sync {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>>;
    fn has(&self, rel: &str) -> bool;
}

/// Data directory on disk (the `data/` folder a deployment serves).
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    fn full(&self, rel: &str) -> PathBuf { self.root.join(rel) }
}

impl DataSource for DirSource {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>> {
        Ok(Arc::from(std::fs::read(self.full(rel))?))
    }

    fn has(&self, rel: &str) -> bool { self.full(rel).exists() }
}

/// Simple in-memory source.
/// Keys are source-relative paths, e.g. "counties.json".
#[derive(Default, Clone)]
pub struct MemSource {
    files: HashMap<String, Arc<[u8]>>,
}

impl MemSource {
    pub fn new(files: HashMap<String, Arc<[u8]>>) -> Self { Self { files } }

    pub fn insert(&mut self, rel: &str, bytes: &[u8]) {
        self.files.insert(rel.to_string(), Arc::from(bytes.to_vec()));
    }
}

impl DataSource for MemSource {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>> {
        self.files.get(rel).cloned()
            .ok_or_else(|| anyhow!("missing data file: {rel}"))
    }

    fn has(&self, rel: &str) -> bool { self.files.contains_key(rel) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mem_source_returns_inserted_bytes() {
        let mut source = MemSource::default();
        source.insert("counties.json", b"[]");

        assert!(source.has("counties.json"));
        assert_eq!(&*source.get("counties.json").unwrap(), b"[]");
    }

    #[test]
    fn mem_source_errors_on_missing_file() {
        let source = MemSource::default();

        assert!(!source.has("counties.json"));
        assert!(source.get("counties.json").is_err());
    }
}
