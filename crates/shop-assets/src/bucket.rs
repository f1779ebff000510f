//! Directory-backed object bucket.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::AssetError;

/// Object bucket rooted at a local directory.
///
/// Keys are `/`-separated paths relative to the root, e.g.
/// `shopcart/cart_shopcart/42.PNG`.
#[derive(Debug, Clone)]
pub struct Bucket {
    root: PathBuf,
}

impl Bucket {
    /// Open a bucket, creating the root directory if needed.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let bucket = Bucket::open("data/bucket")?;
    /// ```
    pub fn open(root: impl AsRef<Path>) -> Result<Self, AssetError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)
            .map_err(|e| AssetError::OpenError(format!("{}: {}", root.display(), e)))?;
        Ok(Self { root })
    }

    /// Store an object, replacing any existing one.
    pub fn put(&self, key: &str, bytes: &[u8]) -> Result<(), AssetError> {
        let path = self.resolve(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| store_error(key, e))?;
        }
        fs::write(&path, bytes).map_err(|e| store_error(key, e))
    }

    /// Fetch an object. Returns `None` if it doesn't exist.
    pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AssetError> {
        let path = self.resolve(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(store_error(key, e)),
        }
    }

    /// Delete an object. Deleting a missing object succeeds.
    pub fn delete(&self, key: &str) -> Result<(), AssetError> {
        let path = self.resolve(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(store_error(key, e)),
        }
    }

    /// Check if an object exists.
    pub fn exists(&self, key: &str) -> Result<bool, AssetError> {
        Ok(self.resolve(key)?.is_file())
    }

    fn resolve(&self, key: &str) -> Result<PathBuf, AssetError> {
        let relative = Path::new(key);
        let valid = !key.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !valid {
            return Err(AssetError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

fn store_error(key: &str, e: std::io::Error) -> AssetError {
    AssetError::StoreError {
        key: key.to_string(),
        message: e.to_string(),
    }
}
