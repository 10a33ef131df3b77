//! Error types for the translation pipeline

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OUTPUT_BUCKET is not set")]
    MissingOutputBucket,

    #[error("Unsupported translate backend: {0}")]
    UnsupportedBackend(String),

    #[error("TRANSLATE_SERVICE_URL is required for the http translate backend")]
    MissingServiceUrl,

    #[error("Unsupported failure policy: {0}")]
    UnsupportedFailurePolicy(String),

    #[error("Failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read s3://{bucket}/{key}: {message}")]
    Read {
        bucket: String,
        key: String,
        message: String,
    },

    #[error("Failed to write s3://{bucket}/{key}: {message}")]
    Write {
        bucket: String,
        key: String,
        message: String,
    },
}

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Translate service error ({source_lang} -> {target_lang}): {message}")]
    Service {
        source_lang: String,
        target_lang: String,
        message: String,
    },
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error(transparent)]
    Translation(#[from] TranslationError),
}

/// Failure of a single notification record.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Failed to read input: {0}")]
    InputRead(String),

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error(transparent)]
    Persist(#[from] StorageError),

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("{failed} of {total} records could not be handled")]
    RecordsFailed { failed: usize, total: usize },
}

pub type StorageResult<T> = Result<T, StorageError>;
pub type TranslationResult<T> = Result<T, TranslationError>;
