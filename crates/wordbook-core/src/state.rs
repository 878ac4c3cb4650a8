use wordbook_types::{LanguageCode, ProfilePhoto};

/// Application-level state shared with every screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub language: LanguageCode,
    pub camera_visible: bool,
    pub profile_photo: ProfilePhoto,
}

impl AppState {
    pub fn new(language: impl Into<LanguageCode>) -> Self {
        Self {
            language: language.into(),
            camera_visible: false,
            profile_photo: ProfilePhoto::bundled_default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("en")
    }
}
