//! In-memory fakes for handler and processor tests

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::error::{StorageError, StorageResult, TranslationError, TranslationResult};
use crate::storage::StorageInterface;
use crate::translate::TranslateInterface;

/// Translator that tags text with the language pair, e.g. `[auto>es] Hello`
#[derive(Default)]
pub struct FakeTranslator {
    failing_target: Option<String>,
    calls: Mutex<Vec<(String, String, String)>>,
}

impl FakeTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(target_lang: &str) -> Self {
        Self {
            failing_target: Some(target_lang.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TranslateInterface for FakeTranslator {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationResult<String> {
        self.calls.lock().unwrap().push((
            text.to_string(),
            source_lang.to_string(),
            target_lang.to_string(),
        ));

        if self.failing_target.as_deref() == Some(target_lang) {
            return Err(TranslationError::Service {
                source_lang: source_lang.to_string(),
                target_lang: target_lang.to_string(),
                message: "UnsupportedLanguagePairException".to_string(),
            });
        }
        Ok(format!("[{}>{}] {}", source_lang, target_lang, text))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub body: Vec<u8>,
    pub content_type: String,
}

/// Bucket/key map standing in for S3
#[derive(Default)]
pub struct InMemoryStorage {
    objects: Mutex<HashMap<(String, String), StoredObject>>,
    failing_writes: HashSet<String>,
    writes: Mutex<Vec<String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes to any key ending with `suffix`
    pub fn failing_writes_to(mut self, suffix: &str) -> Self {
        self.failing_writes.insert(suffix.to_string());
        self
    }

    pub fn put(&self, bucket: &str, key: &str, body: &[u8]) {
        self.objects.lock().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                body: body.to_vec(),
                content_type: "application/json".to_string(),
            },
        );
    }

    pub fn object(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    pub fn json(&self, bucket: &str, key: &str) -> Option<serde_json::Value> {
        self.object(bucket, key)
            .map(|o| serde_json::from_slice(&o.body).unwrap())
    }

    pub fn keys(&self, bucket: &str) -> Vec<String> {
        let mut keys: Vec<String> = self
            .objects
            .lock()
            .unwrap()
            .keys()
            .filter(|(b, _)| b == bucket)
            .map(|(_, k)| k.clone())
            .collect();
        keys.sort();
        keys
    }

    /// Keys in the order they were written, repeats included
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorageInterface for InMemoryStorage {
    async fn read(&self, bucket: &str, key: &str) -> StorageResult<Vec<u8>> {
        self.object(bucket, key)
            .map(|o| o.body)
            .ok_or_else(|| StorageError::Read {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: "NoSuchKey".to_string(),
            })
    }

    async fn write(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<String> {
        if self.failing_writes.iter().any(|s| key.ends_with(s.as_str())) {
            return Err(StorageError::Write {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: "AccessDenied".to_string(),
            });
        }

        self.writes.lock().unwrap().push(key.to_string());
        self.objects.lock().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                body,
                content_type: content_type.to_string(),
            },
        );
        Ok(key.to_string())
    }
}
