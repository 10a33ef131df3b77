use std::sync::Arc;
use serde_json::Value;
use tracing::debug;

use super::types::{Entry, InputDocument, ResultDocument, TranslatedEntry, TranslationResults};
use crate::config::DEFAULT_SOURCE_LANG;
use crate::error::ProcessError;
use crate::translate::TranslateInterface;

/// Translates every entry of an input document into every target language
pub struct PayloadProcessor {
    translator: Arc<dyn TranslateInterface>,
    default_target_langs: Vec<String>,
}

impl PayloadProcessor {
    pub fn new(translator: Arc<dyn TranslateInterface>, default_target_langs: Vec<String>) -> Self {
        Self {
            translator,
            default_target_langs,
        }
    }

    /// Parse a JSON value into an input document and process it
    pub async fn process_value(&self, payload: Value) -> Result<TranslationResults, ProcessError> {
        self.process(InputDocument::from_value(payload)?).await
    }

    /// Produce one result document per target language.
    ///
    /// Languages and entries are walked in input order, one translation call at a
    /// time. The first failure aborts the whole document.
    pub async fn process(&self, payload: InputDocument) -> Result<TranslationResults, ProcessError> {
        let source_lang = payload
            .source_language
            .unwrap_or_else(|| DEFAULT_SOURCE_LANG.to_string());
        let target_langs = payload
            .target_languages
            .unwrap_or_else(|| self.default_target_langs.clone());

        let mut results = TranslationResults::default();
        for target_lang in target_langs {
            let mut entries = Vec::with_capacity(payload.entries.len());
            for (index, entry) in payload.entries.iter().enumerate() {
                let text = entry_text(entry, index)?;
                let translated_text = if text.is_empty() {
                    String::new()
                } else {
                    self.translator
                        .translate(text, &source_lang, &target_lang)
                        .await?
                };
                entries.push(translated_entry(entry, translated_text, &target_lang));
            }

            debug!("Translated {} entries into {}", entries.len(), target_lang);
            results.push(ResultDocument {
                target_language: target_lang,
                source_language: source_lang.clone(),
                entries,
            });
        }

        Ok(results)
    }
}

/// Missing and null text both count as empty.
fn entry_text(entry: &Entry, index: usize) -> Result<&str, ProcessError> {
    match entry.get("text") {
        None | Some(Value::Null) => Ok(""),
        Some(Value::String(text)) => Ok(text),
        Some(other) => Err(ProcessError::InvalidPayload(format!(
            "entry {} has non-string text: {}",
            index, other
        ))),
    }
}

fn translated_entry(entry: &Entry, translated_text: String, target_lang: &str) -> TranslatedEntry {
    let mut translated = entry.clone();
    translated.insert("translated_text".to_string(), Value::String(translated_text));
    translated.insert(
        "target_language".to_string(),
        Value::String(target_lang.to_string()),
    );
    translated
}
