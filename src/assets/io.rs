use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::errors::{BookError, Result};

/// Asset reader trait: byte access to models, buffers and sounds.
pub trait AssetReader {
    /// Reads the full content of `uri`.
    fn read_bytes(&self, uri: &str) -> impl Future<Output = Result<Vec<u8>>>;
}

/// Local file reader rooted at a directory.
pub struct FileAssetReader {
    root_path: PathBuf,
}

impl FileAssetReader {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let root_path = if path.is_file() {
            path.parent().unwrap_or(Path::new(".")).to_path_buf()
        } else {
            path.to_path_buf()
        };
        Self { root_path }
    }

    #[inline]
    #[must_use]
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }
}

impl AssetReader for FileAssetReader {
    async fn read_bytes(&self, uri: &str) -> Result<Vec<u8>> {
        let path = self.root_path.join(uri);
        tokio::fs::read(&path)
            .await
            .map_err(|e| BookError::asset_load(path.display().to_string(), e))
    }
}

/// In-memory reader, for assets embedded in the binary.
#[derive(Default, Clone)]
pub struct MemoryAssetReader {
    files: FxHashMap<String, Arc<[u8]>>,
}

impl MemoryAssetReader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, uri: impl Into<String>, bytes: impl Into<Arc<[u8]>>) {
        self.files.insert(uri.into(), bytes.into());
    }

    #[must_use]
    pub fn with_file(mut self, uri: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        self.insert(uri, bytes);
        self
    }
}

impl AssetReader for MemoryAssetReader {
    async fn read_bytes(&self, uri: &str) -> Result<Vec<u8>> {
        self.files
            .get(uri)
            .map(|bytes| bytes.to_vec())
            .ok_or_else(|| BookError::asset_load(uri, "not found"))
    }
}

/// Joins `uri` onto the directory part of `base` (`a/b/model.gltf` + `buf.bin` → `a/b/buf.bin`).
#[must_use]
pub fn resolve_relative(base: &str, uri: &str) -> String {
    match base.rfind('/') {
        Some(pos) => format!("{}/{uri}", &base[..pos]),
        None => uri.to_string(),
    }
}
