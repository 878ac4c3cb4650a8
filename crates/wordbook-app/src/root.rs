use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use wordbook_config::locale::LocaleConfig;
use wordbook_core::photo::decode_captured_image;
use wordbook_core::{AppState, CameraController, Catalog, LanguageStore, PhotoStore, StoreError};
use wordbook_types::ProfilePhoto;

use crate::camera::CameraHandle;

/// Owner of the app-wide language, camera flag and profile photo.
///
/// Every mutation goes through this type; screens read the state through
/// [`AppRootController::subscribe`].
#[derive(Clone)]
pub struct AppRootController {
    state: Arc<watch::Sender<AppState>>,
    photos: Arc<dyn PhotoStore>,
    languages: Arc<dyn LanguageStore>,
    catalog: Arc<Catalog>,
    locale: Arc<LocaleConfig>,
    /// Set once the user picked a language, so a slow startup load can't undo it
    language_chosen: Arc<AtomicBool>,
}

impl AppRootController {
    pub fn new(
        photos: Arc<dyn PhotoStore>,
        languages: Arc<dyn LanguageStore>,
        catalog: Arc<Catalog>,
        locale: LocaleConfig,
    ) -> Self {
        let (state, _) = watch::channel(AppState::new(locale.default_language.clone()));

        Self {
            state: Arc::new(state),
            photos,
            languages,
            catalog,
            locale: Arc::new(locale),
            language_chosen: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    pub fn camera(&self) -> CameraHandle {
        CameraHandle::new(self.state.clone())
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Message for `key` in the current language
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn localize(&self, key: &str) -> String {
        let state = self.state.borrow();
        self.catalog.localize(&state.language, key)
    }

    /// Restore the persisted language and profile photo.
    ///
    /// Both loads run concurrently and only ever fall back to defaults.
    pub async fn initialize(&self) {
        tracing::info!("Restoring saved preferences");
        tokio::join!(self.restore_language(), self.restore_profile_photo());
    }

    async fn restore_language(&self) {
        let fallback = &self.locale.default_language;

        let code = match self.languages.get().await {
            Ok(code) if self.locale.is_supported(&code) => code,
            Ok(code) => {
                tracing::warn!("Stored language '{}' is not supported, using '{}'", code, fallback);
                fallback.clone()
            }
            Err(StoreError::NotFound) => {
                tracing::debug!("No stored language, using '{}'", fallback);
                fallback.clone()
            }
            Err(e) => {
                tracing::warn!("Unable to read language preference: {}", e);
                fallback.clone()
            }
        };

        // Checked under the state lock, so an update_language racing us always wins
        self.state.send_if_modified(|s| {
            if self.language_chosen.load(Ordering::SeqCst) {
                tracing::debug!("Language changed during startup, keeping the user's choice");
                return false;
            }
            if s.language == code {
                return false;
            }
            s.language = code;
            true
        });
    }

    async fn restore_profile_photo(&self) {
        match self.photos.exists().await {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!("No saved profile photo");
                return;
            }
            Err(e) => {
                tracing::warn!("Unable to access profile photo storage: {}", e);
                return;
            }
        }

        match self.photos.read().await {
            Ok(bytes) => {
                tracing::info!("Profile photo loaded ({} bytes)", bytes.len());
                // A photo captured while we were reading wins
                self.state.send_if_modified(|s| {
                    if !s.profile_photo.is_bundled() {
                        return false;
                    }
                    s.profile_photo = ProfilePhoto::Encoded(bytes);
                    true
                });
            }
            Err(e) => tracing::warn!("Unable to read profile photo: {}", e),
        }
    }

    pub fn toggle_camera(&self) {
        self.camera().toggle();
    }

    pub fn show_camera(&self) {
        self.camera().show();
    }

    pub fn close_camera(&self) {
        self.camera().close();
    }

    /// Store a freshly captured photo and show it.
    ///
    /// The camera is closed whatever happens next; on failure the previous
    /// photo stays on screen.
    pub async fn capture_photo(&self, encoded: &str) {
        self.close_camera();

        let bytes = match decode_captured_image(encoded) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!("Discarding captured photo: {}", e);
                return;
            }
        };

        match self.photos.write(&bytes).await {
            Ok(()) => {
                tracing::info!("Profile photo saved ({} bytes)", bytes.len());
                self.state
                    .send_modify(|s| s.profile_photo = ProfilePhoto::Encoded(bytes));
            }
            Err(e) => tracing::error!("Unable to save profile photo: {}", e),
        }
    }

    /// Switch the UI language now and persist it in the background.
    ///
    /// Returns the persistence task, or `None` when `code` isn't supported.
    pub fn update_language(&self, code: &str) -> Option<JoinHandle<()>> {
        if !self.locale.is_supported(code) {
            tracing::warn!("Ignoring unsupported language '{}'", code);
            return None;
        }

        self.language_chosen.store(true, Ordering::SeqCst);
        self.state.send_if_modified(|s| {
            if s.language == code {
                return false;
            }
            s.language = code.to_string();
            true
        });
        tracing::info!("Language set to '{}'", code);

        let languages = self.languages.clone();
        let code = code.to_string();
        Some(tokio::spawn(async move {
            if let Err(e) = languages.set(&code).await {
                tracing::warn!("Unable to save language '{}': {}", code, e);
            }
        }))
    }
}
