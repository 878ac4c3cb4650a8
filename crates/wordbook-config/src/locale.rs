use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "en".to_string()
}

fn default_supported() -> Vec<String> {
    vec!["en".to_string(), "zh".to_string()]
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct LocaleConfig {
    /// Language used on first run and whenever the stored one is unusable
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default = "default_supported")]
    pub supported: Vec<String>,
    /// Locale document replacing the built-in catalog
    pub catalog_path: Option<PathBuf>,
}

impl LocaleConfig {
    pub fn new() -> Self {
        let catalog_path = env::var("WORDBOOK_LOCALE_FILE").ok().map(PathBuf::from);

        Self {
            catalog_path,
            ..Self::default()
        }
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.supported.iter().any(|c| c == code)
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            supported: default_supported(),
            catalog_path: None,
        }
    }
}
