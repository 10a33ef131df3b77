//! S3 "object created" notification payload and key helpers

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct S3Notification {
    #[serde(rename = "Records", default)]
    pub records: Vec<S3NotificationRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3NotificationRecord {
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct S3Entity {
    #[serde(default)]
    pub bucket: S3Bucket,
    #[serde(default)]
    pub object: S3Object,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct S3Bucket {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct S3Object {
    #[serde(default)]
    pub key: Option<String>,
}

impl S3NotificationRecord {
    /// Bucket and decoded object key, if the record carries both
    pub fn location(&self) -> Option<(String, String)> {
        let bucket = self.s3.bucket.name.as_deref().filter(|b| !b.is_empty())?;
        let key = self.s3.object.key.as_deref().filter(|k| !k.is_empty())?;
        Some((bucket.to_string(), decode_object_key(key)))
    }
}

/// S3 notifications form-encode object keys (`+` for space, `%XX` escapes).
pub fn decode_object_key(key: &str) -> String {
    let plus_decoded = key.replace('+', " ");
    match urlencoding::decode(&plus_decoded) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => plus_decoded,
    }
}

/// Object key with its final `.`-delimited extension removed.
pub fn base_prefix(key: &str) -> &str {
    key.rsplit_once('.').map_or(key, |(prefix, _)| prefix)
}

pub fn translated_key(base_prefix: &str, target_lang: &str) -> String {
    format!("{}.{}.translated.json", base_prefix.trim_end_matches('/'), target_lang)
}

pub fn error_key(base_prefix: &str) -> String {
    format!("{}.error.json", base_prefix)
}
