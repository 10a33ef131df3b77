use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ProcessError;

/// Entry of an input document. Any fields besides `text` are carried through untouched.
pub type Entry = Map<String, Value>;

/// Entry copy with `translated_text` and `target_language` added.
pub type TranslatedEntry = Map<String, Value>;

/// Input document read from the triggering object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputDocument {
    #[serde(default)]
    pub source_language: Option<String>,
    #[serde(default)]
    pub target_languages: Option<Vec<String>>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl InputDocument {
    /// Interpret already-parsed JSON as an input document
    pub fn from_value(value: Value) -> Result<Self, ProcessError> {
        // serde would otherwise fill the struct positionally from an array
        if !value.is_object() {
            return Err(ProcessError::InvalidPayload(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        }
        serde_json::from_value(value).map_err(|e| ProcessError::InvalidPayload(e.to_string()))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Translated document for one target language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDocument {
    pub target_language: String,
    pub source_language: String,
    pub entries: Vec<TranslatedEntry>,
}

/// Written in place of result documents when a record fails
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorMarker {
    pub error: String,
}

/// Result documents in target-language order.
///
/// Repeated target languages are kept; `get` returns the last one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationResults {
    documents: Vec<ResultDocument>,
}

impl TranslationResults {
    pub fn push(&mut self, document: ResultDocument) {
        self.documents.push(document);
    }

    #[cfg(test)]
    pub fn get(&self, target_language: &str) -> Option<&ResultDocument> {
        self.documents
            .iter()
            .rev()
            .find(|d| d.target_language == target_language)
    }

    #[cfg(test)]
    pub fn languages(&self) -> Vec<&str> {
        self.documents
            .iter()
            .map(|d| d.target_language.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResultDocument> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
