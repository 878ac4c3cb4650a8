//! Fakes shared by the controller tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::{Notify, watch};
use tokio::time::timeout;
use wordbook_config::locale::LocaleConfig;
use wordbook_core::{Catalog, LanguageStore, PhotoStore, StoreError};
use wordbook_dictionary::{DefinitionResponse, DefinitionService, ServiceError};
use wordbook_io::{MemoryLanguageStore, MemoryPhotoStore};
use wordbook_types::{LexicalEntry, Sense, WordDefinition};

use crate::lookup::DictionaryLookupController;
use crate::root::AppRootController;

pub const WAIT: Duration = Duration::from_secs(2);

pub fn definition_of(word: &str) -> WordDefinition {
    WordDefinition {
        word: word.to_string(),
        language: "en-gb".to_string(),
        entries: vec![LexicalEntry {
            category: "Noun".to_string(),
            pronunciations: vec![],
            senses: vec![Sense {
                definitions: vec![format!("definition of {word}")],
                examples: vec![],
            }],
        }],
    }
}

#[derive(Clone)]
pub enum Reply {
    Found,
    Failed(String),
    Broken(String),
}

/// Gate holding back one word's response until released
pub struct Hold {
    pub entered: Notify,
    pub release: Notify,
}

/// Definition service answering from a script, recording every call
#[derive(Default)]
pub struct ScriptedService {
    replies: Mutex<HashMap<String, Reply>>,
    holds: Mutex<HashMap<String, Arc<Hold>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, word: &str, reply: Reply) {
        self.replies.lock().unwrap().insert(word.to_string(), reply);
    }

    /// Make lookups of `word` wait until the returned hold is released
    pub fn hold(&self, word: &str) -> Arc<Hold> {
        let hold = Arc::new(Hold {
            entered: Notify::new(),
            release: Notify::new(),
        });
        self.holds
            .lock()
            .unwrap()
            .insert(word.to_string(), hold.clone());
        hold
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DefinitionService for ScriptedService {
    async fn get_definition(&self, word: &str) -> Result<DefinitionResponse, ServiceError> {
        self.calls.lock().unwrap().push(word.to_string());

        let hold = self.holds.lock().unwrap().get(word).cloned();
        if let Some(hold) = hold {
            hold.entered.notify_one();
            hold.release.notified().await;
        }

        let reply = self
            .replies
            .lock()
            .unwrap()
            .get(word)
            .cloned()
            .unwrap_or(Reply::Found);

        match reply {
            Reply::Found => Ok(DefinitionResponse::found(definition_of(word))),
            Reply::Failed(message) => Ok(DefinitionResponse::failed(message)),
            Reply::Broken(message) => Err(ServiceError::Parse(message)),
        }
    }
}

/// Stores whose reads park on a [`Hold`] until released
pub struct GatedPhotoStore {
    pub inner: MemoryPhotoStore,
    pub hold: Arc<Hold>,
}

impl GatedPhotoStore {
    pub fn new(inner: MemoryPhotoStore) -> Self {
        Self {
            inner,
            hold: Arc::new(Hold {
                entered: Notify::new(),
                release: Notify::new(),
            }),
        }
    }
}

#[async_trait::async_trait]
impl PhotoStore for GatedPhotoStore {
    async fn exists(&self) -> Result<bool, StoreError> {
        self.inner.exists().await
    }

    async fn read(&self) -> Result<Vec<u8>, StoreError> {
        self.hold.entered.notify_one();
        self.hold.release.notified().await;
        self.inner.read().await
    }

    async fn write(&self, bytes: &[u8]) -> Result<(), StoreError> {
        self.inner.write(bytes).await
    }
}

pub struct GatedLanguageStore {
    pub inner: MemoryLanguageStore,
    pub hold: Arc<Hold>,
}

impl GatedLanguageStore {
    pub fn new(inner: MemoryLanguageStore) -> Self {
        Self {
            inner,
            hold: Arc::new(Hold {
                entered: Notify::new(),
                release: Notify::new(),
            }),
        }
    }
}

#[async_trait::async_trait]
impl LanguageStore for GatedLanguageStore {
    async fn get(&self) -> Result<String, StoreError> {
        self.hold.entered.notify_one();
        self.hold.release.notified().await;
        self.inner.get().await
    }

    async fn set(&self, code: &str) -> Result<(), StoreError> {
        self.inner.set(code).await
    }
}

pub fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin("en").unwrap())
}

pub struct Harness {
    pub root: AppRootController,
    pub lookup: DictionaryLookupController,
    pub photos: Arc<MemoryPhotoStore>,
    pub languages: Arc<MemoryLanguageStore>,
    pub service: Arc<ScriptedService>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_stores(MemoryPhotoStore::new(), MemoryLanguageStore::new())
    }

    pub fn with_stores(photos: MemoryPhotoStore, languages: MemoryLanguageStore) -> Self {
        let photos = Arc::new(photos);
        let languages = Arc::new(languages);
        let service = ScriptedService::new();

        let root = AppRootController::new(
            photos.clone(),
            languages.clone(),
            catalog(),
            LocaleConfig::default(),
        );
        let lookup = DictionaryLookupController::new(service.clone(), catalog(), root.subscribe());

        Self {
            root,
            lookup,
            photos,
            languages,
            service,
        }
    }
}

/// Wait until the watched value satisfies `f`, failing the test after [`WAIT`]
pub async fn wait_until<T>(rx: &mut watch::Receiver<T>, f: impl FnMut(&T) -> bool) {
    timeout(WAIT, rx.wait_for(f))
        .await
        .expect("timed out waiting for state")
        .expect("state channel closed");
}
