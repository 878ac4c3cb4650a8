use async_trait::async_trait;

use crate::error::StoreError;

/// Storage for the single profile photo of this installation
#[async_trait]
pub trait PhotoStore: Send + Sync {
    async fn exists(&self) -> Result<bool, StoreError>;

    /// Stored bytes, `StoreError::NotFound` when no photo was saved
    async fn read(&self) -> Result<Vec<u8>, StoreError>;

    async fn write(&self, bytes: &[u8]) -> Result<(), StoreError>;
}

/// Persisted language selection
#[async_trait]
pub trait LanguageStore: Send + Sync {
    /// Stored code, `StoreError::NotFound` on first run
    async fn get(&self) -> Result<String, StoreError>;

    async fn set(&self, code: &str) -> Result<(), StoreError>;
}
