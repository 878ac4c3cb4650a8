use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::locale::LocaleConfig;
use self::storage::StorageConfig;

pub mod dictionary;
pub mod locale;
pub mod storage;

fn default_event_queue_capacity() -> usize {
    64
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub dictionary: DictionaryConfig,
    pub locale: LocaleConfig,

    /// Capacity of the host-to-app event channel
    #[serde(default = "default_event_queue_capacity")]
    pub event_queue_capacity: usize,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Config {
    pub fn new() -> Self {
        let event_queue_capacity = env::var("EVENT_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_event_queue_capacity);

        let log_json = env::var("LOG_JSON")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Config {
            storage: StorageConfig::new(),
            dictionary: DictionaryConfig::new(),
            locale: LocaleConfig::new(),

            event_queue_capacity,
            log_json,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            dictionary: DictionaryConfig::default(),
            locale: LocaleConfig::default(),
            event_queue_capacity: default_event_queue_capacity(),
            log_json: false,
        }
    }
}
