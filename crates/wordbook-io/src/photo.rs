use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::fs;
use wordbook_config::storage::StorageConfig;
use wordbook_core::{PhotoStore, StoreError};

static STAGING_SEQ: AtomicU64 = AtomicU64::new(0);

/// Profile photo kept as a raw image file in the document directory
#[derive(Debug, Clone)]
pub struct FilePhotoStore {
    path: PathBuf,
}

impl FilePhotoStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.photo_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Private sibling file for one write, so overlapping writes never share it
    fn staging_path(&self) -> PathBuf {
        let seq = STAGING_SEQ.fetch_add(1, Ordering::Relaxed);
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.path
            .with_file_name(format!("{}.{}.{}.part", name, std::process::id(), seq))
    }
}

#[async_trait]
impl PhotoStore for FilePhotoStore {
    async fn exists(&self) -> Result<bool, StoreError> {
        Ok(fs::try_exists(&self.path).await?)
    }

    async fn read(&self) -> Result<Vec<u8>, StoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, bytes: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        // Readers never observe a half-written image
        let staging = self.staging_path();
        if let Err(e) = fs::write(&staging, bytes).await {
            let _ = fs::remove_file(&staging).await;
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&staging, &self.path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(e.into());
        }

        tracing::debug!("Wrote {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_then_read_returns_same_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePhotoStore::new(dir.path().join("nested").join("profilePic.png"));
        let photo: Vec<u8> = (0..=255u8).cycle().take(4096).collect();

        store.write(&photo).await.unwrap();

        assert!(store.exists().await.unwrap());
        assert_eq!(store.read().await.unwrap(), photo);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePhotoStore::new(dir.path().join("profilePic.png"));

        assert!(!store.exists().await.unwrap());
        assert!(store.read().await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn second_write_replaces_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePhotoStore::new(dir.path().join("profilePic.png"));

        store.write(b"first").await.unwrap();
        store.write(b"second").await.unwrap();

        assert_eq!(store.read().await.unwrap(), b"second");
        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .filter(|n| n != "profilePic.png")
            .collect();
        assert!(leftovers.is_empty(), "staging files left behind: {leftovers:?}");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn overlapping_writes_both_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePhotoStore::new(dir.path().join("profilePic.png"));
        let a = vec![b'a'; 256 * 1024];
        let b = vec![b'b'; 256 * 1024];

        for _ in 0..50 {
            let (first, second) = (store.clone(), store.clone());
            let (bytes_a, bytes_b) = (a.clone(), b.clone());
            let wa = tokio::spawn(async move { first.write(&bytes_a).await });
            let wb = tokio::spawn(async move { second.write(&bytes_b).await });

            wa.await.unwrap().unwrap();
            wb.await.unwrap().unwrap();

            let stored = store.read().await.unwrap();
            assert!(stored == a || stored == b);
        }
    }

    #[tokio::test]
    async fn write_into_a_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();
        let store = FilePhotoStore::new(blocker.join("profilePic.png"));

        assert!(matches!(
            store.write(b"photo").await,
            Err(StoreError::Io(_))
        ));
    }
}
