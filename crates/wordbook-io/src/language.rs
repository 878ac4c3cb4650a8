use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use wordbook_config::storage::StorageConfig;
use wordbook_core::{LanguageStore, StoreError};

#[derive(Serialize, Deserialize)]
struct LanguagePreference {
    language: String,
}

/// Language selection kept as a small JSON document
#[derive(Debug, Clone)]
pub struct FileLanguageStore {
    path: PathBuf,
}

impl FileLanguageStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.language_path())
    }
}

#[async_trait]
impl LanguageStore for FileLanguageStore {
    async fn get(&self) -> Result<String, StoreError> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(StoreError::NotFound),
            Err(e) => return Err(e.into()),
        };

        if data.trim().is_empty() {
            return Err(StoreError::NotFound);
        }

        let pref: LanguagePreference =
            serde_json::from_str(&data).map_err(|e| StoreError::Corrupt(e.to_string()))?;

        let code = pref.language.trim();
        if code.is_empty() {
            return Err(StoreError::NotFound);
        }

        Ok(code.to_string())
    }

    async fn set(&self, code: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let pref = LanguagePreference {
            language: code.to_string(),
        };
        let data =
            serde_json::to_string(&pref).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        fs::write(&self.path, data).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_run_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileLanguageStore::new(dir.path().join("language.json"));

        assert!(store.get().await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn empty_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("language.json");
        std::fs::write(&path, "  \n").unwrap();

        let store = FileLanguageStore::new(path);
        assert!(store.get().await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileLanguageStore::new(dir.path().join("prefs").join("language.json"));

        store.set("zh").await.unwrap();
        assert_eq!(store.get().await.unwrap(), "zh");

        store.set("en").await.unwrap();
        assert_eq!(store.get().await.unwrap(), "en");
    }

    #[tokio::test]
    async fn garbage_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("language.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FileLanguageStore::new(path);
        assert!(matches!(store.get().await, Err(StoreError::Corrupt(_))));
    }
}
