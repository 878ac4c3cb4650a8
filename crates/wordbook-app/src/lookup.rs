use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use wordbook_core::locale::{INVALID_WORD, SERVICE_ISSUE};
use wordbook_core::{AppState, Catalog};
use wordbook_dictionary::DefinitionService;
use wordbook_types::{LookupResult, LookupState};

/// A lookup that has shown Loading and still needs its service call
#[derive(Debug)]
pub struct PendingLookup {
    sequence: u64,
    word: String,
}

impl PendingLookup {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn word(&self) -> &str {
        &self.word
    }
}

/// Drives word lookups for the detail screen.
///
/// Each call to [`lookup`](Self::lookup) takes a new sequence number and only
/// the newest one may publish, so a slow response for an older word never
/// replaces a newer result.
#[derive(Clone)]
pub struct DictionaryLookupController {
    service: Arc<dyn DefinitionService>,
    catalog: Arc<Catalog>,
    app_state: watch::Receiver<AppState>,
    latest: Arc<AtomicU64>,
    result: Arc<watch::Sender<LookupResult>>,
}

impl DictionaryLookupController {
    pub fn new(
        service: Arc<dyn DefinitionService>,
        catalog: Arc<Catalog>,
        app_state: watch::Receiver<AppState>,
    ) -> Self {
        let (result, _) = watch::channel(LookupResult::idle());

        Self {
            service,
            catalog,
            app_state,
            latest: Arc::new(AtomicU64::new(0)),
            result: Arc::new(result),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<LookupResult> {
        self.result.subscribe()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn current(&self) -> LookupResult {
        self.result.borrow().clone()
    }

    /// Detail screen entry point: look up the route's word if it has one
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn open(&self, word: Option<&str>) {
        if let Some(pending) = self.start(word) {
            self.resolve(pending).await;
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn lookup(&self, word: &str) {
        if let Some(pending) = self.begin(word) {
            self.resolve(pending).await;
        }
    }

    /// [`begin`](Self::begin) for an optional route word; no word leaves the
    /// current result alone.
    pub fn start(&self, word: Option<&str>) -> Option<PendingLookup> {
        match word {
            Some(word) => self.begin(word),
            None => {
                tracing::debug!("Detail opened without a word");
                None
            }
        }
    }

    /// Claim the next sequence number and publish the immediate state.
    ///
    /// Blank input settles right here with the invalid-word message; anything
    /// else shows Loading and comes back as a [`PendingLookup`] for
    /// [`resolve`](Self::resolve).
    pub fn begin(&self, word: &str) -> Option<PendingLookup> {
        let sequence = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let word = word.trim();

        if word.is_empty() {
            let message = self.localize(INVALID_WORD);
            self.publish(sequence, word, LookupState::Error(message));
            return None;
        }

        self.publish(sequence, word, LookupState::Loading);
        tracing::debug!("Lookup #{} for '{}'", sequence, word);

        Some(PendingLookup {
            sequence,
            word: word.to_string(),
        })
    }

    pub async fn resolve(&self, pending: PendingLookup) {
        let PendingLookup { sequence, word } = pending;

        if sequence != self.latest.load(Ordering::SeqCst) {
            tracing::debug!("Lookup #{} superseded before it started", sequence);
            return;
        }

        let state = match self.service.get_definition(&word).await {
            Ok(response) => match response.payload {
                Some(payload) if response.success => LookupState::Success(payload),
                _ => {
                    let detail = response.message.unwrap_or_default();
                    LookupState::Error(format!("{}{}", self.localize(SERVICE_ISSUE), detail))
                }
            },
            Err(e) => {
                tracing::error!("Lookup for '{}' failed: {}", word, e);
                LookupState::Error(e.to_string())
            }
        };

        if !self.publish(sequence, &word, state) {
            tracing::debug!("Dropping result of superseded lookup #{}", sequence);
        }
    }

    fn localize(&self, key: &str) -> String {
        let state = self.app_state.borrow();
        self.catalog.localize(&state.language, key)
    }

    /// Replace the visible result if `sequence` is still the newest lookup
    fn publish(&self, sequence: u64, word: &str, state: LookupState) -> bool {
        self.result.send_if_modified(|current| {
            if sequence != self.latest.load(Ordering::SeqCst) || sequence < current.sequence {
                return false;
            }
            *current = LookupResult {
                sequence,
                word: word.to_string(),
                state,
            };
            true
        })
    }
}
