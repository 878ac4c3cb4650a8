use std::io;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use wordbook_core::{LanguageStore, PhotoStore, StoreError};

fn injected_failure(op: &str) -> StoreError {
    StoreError::Io(io::Error::other(format!("injected {op} failure")))
}

/// Photo store living in process memory, with switchable failures
#[derive(Debug, Default)]
pub struct MemoryPhotoStore {
    bytes: Mutex<Option<Vec<u8>>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryPhotoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_photo(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Mutex::new(Some(bytes)),
            ..Self::default()
        }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Option<Vec<u8>> {
        self.bytes.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl PhotoStore for MemoryPhotoStore {
    async fn exists(&self) -> Result<bool, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(injected_failure("exists"));
        }
        Ok(self.stored().is_some())
    }

    async fn read(&self) -> Result<Vec<u8>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(injected_failure("read"));
        }
        self.stored().ok_or(StoreError::NotFound)
    }

    async fn write(&self, bytes: &[u8]) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(injected_failure("write"));
        }
        *self.bytes.lock().unwrap_or_else(|e| e.into_inner()) = Some(bytes.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Language preference living in process memory, with switchable failures
#[derive(Debug, Default)]
pub struct MemoryLanguageStore {
    code: Mutex<Option<String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryLanguageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(code: impl Into<String>) -> Self {
        Self {
            code: Mutex::new(Some(code.into())),
            ..Self::default()
        }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn stored(&self) -> Option<String> {
        self.code.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl LanguageStore for MemoryLanguageStore {
    async fn get(&self) -> Result<String, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(injected_failure("get"));
        }
        self.stored()
            .filter(|c| !c.is_empty())
            .ok_or(StoreError::NotFound)
    }

    async fn set(&self, code: &str) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(injected_failure("set"));
        }
        *self.code.lock().unwrap_or_else(|e| e.into_inner()) = Some(code.to_string());
        Ok(())
    }
}
