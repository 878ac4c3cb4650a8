use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;
use wordbook_config::locale::LocaleConfig;

use crate::error::CatalogError;

const BUILTIN_LOCALE: &str = include_str!("../locale.json");

pub const INVALID_WORD: &str = "Error.InvalidWord";
pub const SERVICE_ISSUE: &str = "Error.OxfordIssue";
pub const TITLE: &str = "Title";
pub const LOADING: &str = "Status.Loading";
pub const CAMERA_HIDDEN: &str = "Camera.Hidden";
pub const CAMERA_VISIBLE: &str = "Camera.Visible";

/// Localized message strings keyed by language, then by dotted message key
#[derive(Debug, Clone)]
pub struct Catalog {
    default_language: String,
    messages: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    /// Parse a locale document shaped `{ "<lang>": { "Group": { "Key": "text" } } }`
    pub fn from_json_str(
        json: &str,
        default_language: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let document: Value = serde_json::from_str(json)?;
        let Value::Object(languages) = document else {
            return Err(CatalogError::InvalidEntry("<root>".to_string()));
        };

        let mut messages = HashMap::new();
        for (language, tree) in languages {
            let mut flat = HashMap::new();
            flatten(&language, "", &tree, &mut flat)?;
            messages.insert(language, flat);
        }

        Ok(Self {
            default_language: default_language.into(),
            messages,
        })
    }

    /// Catalog shipped inside the binary
    pub fn builtin(default_language: impl Into<String>) -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_LOCALE, default_language)
    }

    pub fn load(path: &Path, default_language: impl Into<String>) -> Result<Self, CatalogError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data, default_language)
    }

    /// Locale file from config when one is set, built-in catalog otherwise
    pub fn from_config(config: &LocaleConfig) -> Result<Self, CatalogError> {
        match &config.catalog_path {
            Some(path) => {
                tracing::info!("Loading locale catalog from {}", path.display());
                Self::load(path, config.default_language.clone())
            }
            None => Self::builtin(config.default_language.clone()),
        }
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn languages(&self) -> Vec<&str> {
        let mut langs: Vec<&str> = self.messages.keys().map(String::as_str).collect();
        langs.sort_unstable();
        langs
    }

    pub fn get(&self, language: &str, key: &str) -> Option<&str> {
        self.messages
            .get(language)
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// Message for `key`, falling back to the default language and then to the key
    pub fn localize(&self, language: &str, key: &str) -> String {
        self.get(language, key)
            .or_else(|| self.get(&self.default_language, key))
            .unwrap_or(key)
            .to_string()
    }
}

fn flatten(
    language: &str,
    prefix: &str,
    node: &Value,
    out: &mut HashMap<String, String>,
) -> Result<(), CatalogError> {
    match node {
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
            Ok(())
        }
        Value::Object(children) => {
            for (name, child) in children {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                flatten(language, &key, child, out)?;
            }
            Ok(())
        }
        _ => Err(CatalogError::InvalidEntry(format!("{language}:{prefix}"))),
    }
}
