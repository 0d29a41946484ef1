//! Blob storage

use parking_lot::RwLock;
use plinth_core::{Backend, PlatformConfig, PlatformError, PlatformService, Result};
use std::any::Any;
use std::collections::BTreeMap;

/// Managed cloud blob storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudStorageServices {
    bucket: String,
}

impl CloudStorageServices {
    /// Load from configuration; requires a storage bucket
    pub fn load(config: &PlatformConfig) -> Result<Self> {
        let bucket = config.cloud.storage_bucket.clone().ok_or_else(|| {
            PlatformError::implementation_load(
                Backend::CloudStorage.name(),
                "cloud.storage_bucket is not configured",
            )
        })?;
        Ok(Self { bucket })
    }

    /// Bucket objects are stored in
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Public URL of an object
    pub fn object_url(&self, path: &str) -> String {
        format!("https://storage.googleapis.com/{}/{path}", self.bucket)
    }
}

impl PlatformService for CloudStorageServices {
    fn backend(&self) -> Backend {
        Backend::CloudStorage
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Local in-memory blob storage
#[derive(Debug, Default)]
pub struct DevModeStorageServices {
    blobs: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl DevModeStorageServices {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a blob, replacing any existing one
    pub fn commit(&self, path: &str, data: Vec<u8>) -> Result<()> {
        if path.is_empty() || path.starts_with('/') {
            return Err(PlatformError::invalid_argument(format!(
                "Invalid blob path: {path:?}"
            )));
        }
        self.blobs.write().insert(path.to_string(), data);
        Ok(())
    }

    /// Read a blob
    pub fn get(&self, path: &str) -> Option<Vec<u8>> {
        self.blobs.read().get(path).cloned()
    }

    /// Whether a blob exists
    pub fn isfile(&self, path: &str) -> bool {
        self.blobs.read().contains_key(path)
    }

    /// Delete a blob
    pub fn delete(&self, path: &str) -> Result<()> {
        self.blobs
            .write()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| PlatformError::storage(format!("Blob not found: {path}")))
    }

    /// Copy a blob to a new path
    pub fn copy(&self, source: &str, destination: &str) -> Result<()> {
        let data = self
            .get(source)
            .ok_or_else(|| PlatformError::storage(format!("Blob not found: {source}")))?;
        self.commit(destination, data)
    }

    /// Paths under a prefix, sorted
    pub fn listdir(&self, prefix: &str) -> Vec<String> {
        self.blobs
            .read()
            .range(prefix.to_string()..)
            .take_while(|(path, _)| path.starts_with(prefix))
            .map(|(path, _)| path.clone())
            .collect()
    }
}

impl PlatformService for DevModeStorageServices {
    fn backend(&self) -> Backend {
        Backend::DevModeStorage
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloud_load_requires_bucket() {
        let mut config = PlatformConfig::default();
        assert!(matches!(
            CloudStorageServices::load(&config),
            Err(PlatformError::ImplementationLoad { .. })
        ));
        config.cloud.storage_bucket = Some("assets".into());
        let storage = CloudStorageServices::load(&config).unwrap();
        assert_eq!(
            storage.object_url("exploration/e1/image.png"),
            "https://storage.googleapis.com/assets/exploration/e1/image.png"
        );
    }

    #[test]
    fn test_dev_storage_operations() {
        let storage = DevModeStorageServices::new();
        storage.commit("exploration/e1/a.png", vec![1, 2]).unwrap();
        storage.commit("exploration/e1/b.png", vec![3]).unwrap();
        storage.commit("topic/t1/c.png", vec![4]).unwrap();

        assert_eq!(
            storage.listdir("exploration/"),
            vec!["exploration/e1/a.png", "exploration/e1/b.png"]
        );

        storage.copy("exploration/e1/a.png", "topic/t1/a.png").unwrap();
        assert_eq!(storage.get("topic/t1/a.png"), Some(vec![1, 2]));

        storage.delete("exploration/e1/a.png").unwrap();
        assert!(!storage.isfile("exploration/e1/a.png"));
        assert!(storage.delete("exploration/e1/a.png").is_err());
        assert!(storage.commit("/absolute", vec![]).is_err());
    }
}
