use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

pub type LanguageCode = String;

/// Bundled image shown until a photo has been captured
pub const DEFAULT_PROFILE_PHOTO: &str = "assets/icon.png";

#[derive(Debug, Clone)]
pub enum AppEvent {
    ToggleCamera,
    ShowCamera,
    CloseCamera,
    /// Encoded still image from the camera, possibly carrying a data-URI prefix
    PhotoCaptured(String),
    UpdateLanguage(LanguageCode),
    LookupWord(String),
    /// Detail screen opened, with the word from its route params if any
    OpenDetail(Option<String>),
    Shutdown,
}

/// Image the profile header displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfilePhoto {
    Bundled(String),
    Encoded(Vec<u8>),
}

impl ProfilePhoto {
    pub fn bundled_default() -> Self {
        ProfilePhoto::Bundled(DEFAULT_PROFILE_PHOTO.to_string())
    }

    pub fn is_bundled(&self) -> bool {
        matches!(self, ProfilePhoto::Bundled(_))
    }

    /// Reference a view can hand to its image widget
    pub fn display_uri(&self) -> String {
        match self {
            ProfilePhoto::Bundled(path) => path.clone(),
            ProfilePhoto::Encoded(bytes) => {
                format!("data:image/png;base64,{}", STANDARD.encode(bytes))
            }
        }
    }
}

impl Default for ProfilePhoto {
    fn default() -> Self {
        Self::bundled_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupState {
    Idle,
    Loading,
    Success(WordDefinition),
    Error(String),
}

/// Latest lookup as seen by the detail screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    /// Invocation that produced this result, 0 before any lookup
    pub sequence: u64,
    pub word: String,
    pub state: LookupState,
}

impl LookupResult {
    pub fn idle() -> Self {
        Self {
            sequence: 0,
            word: String::new(),
            state: LookupState::Idle,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LookupState::Loading)
    }

    pub fn definition(&self) -> Option<&WordDefinition> {
        match &self.state {
            LookupState::Success(def) => Some(def),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            LookupState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

impl Default for LookupResult {
    fn default() -> Self {
        Self::idle()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDefinition {
    pub word: String,
    pub language: String,
    #[serde(default)]
    pub entries: Vec<LexicalEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalEntry {
    pub category: String,
    #[serde(default)]
    pub pronunciations: Vec<String>,
    #[serde(default)]
    pub senses: Vec<Sense>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    #[serde(default)]
    pub definitions: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl WordDefinition {
    /// First definition text, used for one-line summaries
    pub fn first_definition(&self) -> Option<&str> {
        self.entries
            .iter()
            .flat_map(|e| e.senses.iter())
            .flat_map(|s| s.definitions.iter())
            .map(String::as_str)
            .next()
    }
}
