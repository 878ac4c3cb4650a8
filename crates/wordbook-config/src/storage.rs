use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_document_dir() -> PathBuf {
    PathBuf::from("wordbook-data")
}

fn default_photo_file() -> String {
    "profilePic.png".to_string()
}

fn default_language_file() -> String {
    "language.json".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the app's persisted files
    #[serde(default = "default_document_dir")]
    pub document_dir: PathBuf,
    #[serde(default = "default_photo_file")]
    pub photo_file: String,
    #[serde(default = "default_language_file")]
    pub language_file: String,
}

impl StorageConfig {
    pub fn new() -> Self {
        let document_dir = env::var("WORDBOOK_DOCUMENT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_document_dir());

        Self {
            document_dir,
            ..Self::default()
        }
    }

    pub fn photo_path(&self) -> PathBuf {
        self.document_dir.join(&self.photo_file)
    }

    pub fn language_path(&self) -> PathBuf {
        self.document_dir.join(&self.language_file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            document_dir: default_document_dir(),
            photo_file: default_photo_file(),
            language_file: default_language_file(),
        }
    }
}
