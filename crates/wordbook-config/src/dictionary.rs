use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://od-api.oxforddictionaries.com/api/v2".to_string()
}

fn default_source_lang() -> String {
    "en-gb".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub app_key: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let api_url = env::var("OXFORD_API_URL").unwrap_or_else(|_| default_api_url());
        let app_id = env::var("OXFORD_APP_ID").unwrap_or_default();
        let app_key = env::var("OXFORD_APP_KEY").unwrap_or_default();

        let timeout_seconds = env::var("DICTIONARY_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            api_url,
            source_lang: default_source_lang(),
            app_id,
            app_key,
            timeout_seconds,
        }
    }

    pub fn has_credentials(&self) -> bool {
        !self.app_id.is_empty() && !self.app_key.is_empty()
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            source_lang: default_source_lang(),
            app_id: String::new(),
            app_key: String::new(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
