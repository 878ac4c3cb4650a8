use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use wordbook_config::dictionary::DictionaryConfig;
use wordbook_types::{LexicalEntry, Sense, WordDefinition};

use crate::{DefinitionResponse, DefinitionService, ServiceError};

/// Client for the Oxford Dictionaries `entries` endpoint
#[derive(Clone)]
pub struct OxfordClient {
    client: reqwest::Client,
    api_url: String,
    source_lang: String,
    app_id: String,
    app_key: String,
}

impl OxfordClient {
    pub fn new(config: &DictionaryConfig) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: &DictionaryConfig) -> Self {
        Self {
            client,
            api_url: config.api_url.clone(),
            source_lang: config.source_lang.clone(),
            app_id: config.app_id.clone(),
            app_key: config.app_key.clone(),
        }
    }

    fn entries_url(&self, word: &str) -> Result<reqwest::Url, ServiceError> {
        let word = word.to_lowercase();
        let mut url = reqwest::Url::parse(&self.api_url)
            .map_err(|e| ServiceError::Config(format!("bad api url {}: {e}", self.api_url)))?;

        url.path_segments_mut()
            .map_err(|_| ServiceError::Config(format!("api url {} has no path", self.api_url)))?
            .pop_if_empty()
            .extend(["entries", self.source_lang.as_str(), word.as_str()]);

        Ok(url)
    }
}

#[async_trait]
impl DefinitionService for OxfordClient {
    async fn get_definition(&self, word: &str) -> Result<DefinitionResponse, ServiceError> {
        if self.app_id.is_empty() || self.app_key.is_empty() {
            return Err(ServiceError::Config(
                "missing OXFORD_APP_ID or OXFORD_APP_KEY".to_string(),
            ));
        }

        let url = self.entries_url(word)?;
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("app_id", &self.app_id)
            .header("app_key", &self.app_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|json| json["error"].as_str().map(str::to_string))
                .unwrap_or_else(|| format!("HTTP {status}"));

            tracing::warn!("Dictionary lookup for '{}' failed: {}", word, message);
            return Ok(DefinitionResponse::failed(message));
        }

        let json: Value = serde_json::from_str(&body)
            .map_err(|e| ServiceError::Parse(e.to_string()))?;

        Ok(DefinitionResponse::found(parse_entries(word, &json)?))
    }
}

/// Map an `entries` response body onto a [`WordDefinition`]
pub(crate) fn parse_entries(word: &str, json: &Value) -> Result<WordDefinition, ServiceError> {
    let results = json["results"]
        .as_array()
        .ok_or_else(|| ServiceError::Parse("No results in response".to_string()))?;

    let first = results
        .first()
        .ok_or_else(|| ServiceError::Parse("Empty results in response".to_string()))?;

    let mut definition = WordDefinition {
        word: first["word"].as_str().unwrap_or(word).to_string(),
        language: first["language"].as_str().unwrap_or_default().to_string(),
        entries: Vec::new(),
    };

    for result in results {
        for lexical in result["lexicalEntries"].as_array().into_iter().flatten() {
            let category = lexical["lexicalCategory"]["text"]
                .as_str()
                .unwrap_or_default()
                .to_string();

            let mut entry = LexicalEntry {
                category,
                pronunciations: Vec::new(),
                senses: Vec::new(),
            };

            for inner in lexical["entries"].as_array().into_iter().flatten() {
                entry.pronunciations.extend(
                    inner["pronunciations"]
                        .as_array()
                        .into_iter()
                        .flatten()
                        .filter_map(|p| p["phoneticSpelling"].as_str())
                        .map(str::to_string),
                );

                for sense in inner["senses"].as_array().into_iter().flatten() {
                    collect_sense(sense, &mut entry.senses);
                }
            }

            definition.entries.push(entry);
        }
    }

    Ok(definition)
}

fn collect_sense(sense: &Value, out: &mut Vec<Sense>) {
    let strings = |field: &str| -> Vec<String> {
        sense[field]
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    };

    let examples = sense["examples"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|e| e["text"].as_str())
        .map(str::to_string)
        .collect();

    let definitions = strings("definitions");
    if !definitions.is_empty() {
        out.push(Sense {
            definitions,
            examples,
        });
    }

    for sub in sense["subsenses"].as_array().into_iter().flatten() {
        collect_sense(sub, out);
    }
}
