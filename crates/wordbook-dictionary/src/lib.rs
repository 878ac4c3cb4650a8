mod oxford;

pub use oxford::OxfordClient;

use serde::{Deserialize, Serialize};
use wordbook_types::WordDefinition;

/// Word definition provider interface
#[async_trait::async_trait]
pub trait DefinitionService: Send + Sync {
    /// Look up a single word.
    ///
    /// A service that answered but had nothing useful reports
    /// `success: false`; only transport and decoding problems are `Err`.
    async fn get_definition(&self, word: &str) -> Result<DefinitionResponse, ServiceError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionResponse {
    pub success: bool,
    pub payload: Option<WordDefinition>,
    pub message: Option<String>,
}

impl DefinitionResponse {
    pub fn found(payload: WordDefinition) -> Self {
        Self {
            success: true,
            payload: Some(payload),
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            payload: None,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Dictionary service is not configured: {0}")]
    Config(String),
}
