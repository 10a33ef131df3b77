use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config::{Config, FailurePolicy};
use crate::error::{HandlerError, RecordError};
use crate::event::{base_prefix, error_key, translated_key, S3Notification, S3NotificationRecord};
use crate::processor::{ErrorMarker, PayloadProcessor};
use crate::storage::StorageInterface;
use crate::translate::TranslateInterface;

const JSON_CONTENT_TYPE: &str = "application/json";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Acknowledgement returned to the Lambda runtime
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandlerResponse {
    pub status: String,
}

impl HandlerResponse {
    fn done() -> Self {
        Self {
            status: "done".to_string(),
        }
    }
}

/// How a single notification record ended
#[derive(Debug, Clone, PartialEq)]
enum RecordOutcome {
    Translated,
    /// Nothing written: unresolvable record, unreadable or unparsable object
    Skipped,
    ErrorMarkerWritten,
    /// Processing failed and the error marker could not be written either
    Abandoned,
}

impl RecordOutcome {
    /// Failures that left no trace in the output bucket
    fn is_unreported(&self) -> bool {
        matches!(self, RecordOutcome::Skipped | RecordOutcome::Abandoned)
    }
}

/// Consumes S3 object-created notifications and writes translated documents
pub struct EventHandler {
    config: Arc<Config>,
    storage: Arc<dyn StorageInterface>,
    processor: PayloadProcessor,
}

impl EventHandler {
    pub fn new(
        config: Arc<Config>,
        storage: Arc<dyn StorageInterface>,
        translator: Arc<dyn TranslateInterface>,
    ) -> Self {
        let processor = PayloadProcessor::new(translator, config.default_target_langs.clone());
        Self {
            config,
            storage,
            processor,
        }
    }

    /// Handle every record of a notification in order.
    ///
    /// A failing record never stops the ones after it. Under
    /// `FailurePolicy::Propagate` the invocation fails afterwards if any record
    /// was dropped without an error marker.
    pub async fn handle(&self, event: S3Notification) -> Result<HandlerResponse, HandlerError> {
        info!(
            "Received event: {}",
            serde_json::to_string(&event).unwrap_or_default()
        );

        let total = event.records.len();
        let mut failed = 0;
        for record in &event.records {
            if self.handle_record(record).await.is_unreported() {
                failed += 1;
            }
        }

        if failed > 0 {
            warn!("{} of {} records were dropped without output", failed, total);
            if self.config.failure_policy == FailurePolicy::Propagate {
                return Err(HandlerError::RecordsFailed { failed, total });
            }
        }

        Ok(HandlerResponse::done())
    }

    async fn handle_record(&self, record: &S3NotificationRecord) -> RecordOutcome {
        let Some((bucket, key)) = record.location() else {
            warn!("Skipping record without bucket name or object key");
            return RecordOutcome::Skipped;
        };
        info!(
            "Processing s3://{}/{} ({})",
            bucket,
            key,
            record.event_name.as_deref().unwrap_or("unknown event")
        );

        let payload = match self.fetch(&bucket, &key).await {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to read or parse JSON from S3: {}", e);
                return RecordOutcome::Skipped;
            }
        };

        let prefix = base_prefix(&key);
        match self.translate_and_persist(prefix, payload).await {
            Ok(documents) => {
                info!("Finished s3://{}/{}: {} translated documents", bucket, key, documents);
                RecordOutcome::Translated
            }
            Err(e) => {
                error!("Translation processing failed for s3://{}/{}: {}", bucket, key, e);
                self.write_error_marker(prefix, &e).await
            }
        }
    }

    async fn fetch(&self, bucket: &str, key: &str) -> Result<Value, RecordError> {
        let body = self
            .storage
            .read(bucket, key)
            .await
            .map_err(|e| RecordError::InputRead(e.to_string()))?;

        let json = body.strip_prefix(UTF8_BOM).unwrap_or(&body[..]);
        serde_json::from_slice(json).map_err(|e| RecordError::InputRead(format!("invalid JSON: {}", e)))
    }

    async fn translate_and_persist(&self, prefix: &str, payload: Value) -> Result<usize, RecordError> {
        let results = self.processor.process_value(payload).await?;
        let bucket = &self.config.output_bucket;
        if results.is_empty() {
            warn!("No target languages for {}, nothing to write", prefix);
        }

        for document in results.iter() {
            let out_key = translated_key(prefix, &document.target_language);
            // serde_json emits UTF-8 as is; non-ASCII text is not escaped
            let body = serde_json::to_vec(document)?;
            self.storage
                .write(bucket, &out_key, body, JSON_CONTENT_TYPE)
                .await?;
            info!("Wrote translated file {} to bucket {}", out_key, bucket);
        }

        Ok(results.len())
    }

    async fn write_error_marker(&self, prefix: &str, cause: &RecordError) -> RecordOutcome {
        let marker_key = error_key(prefix);
        let marker = ErrorMarker {
            error: cause.to_string(),
        };

        let body = match serde_json::to_vec(&marker) {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to write error marker {}: {}", marker_key, e);
                return RecordOutcome::Abandoned;
            }
        };

        match self
            .storage
            .write(&self.config.output_bucket, &marker_key, body, JSON_CONTENT_TYPE)
            .await
        {
            Ok(_) => {
                info!("Wrote error marker {} to bucket {}", marker_key, self.config.output_bucket);
                RecordOutcome::ErrorMarkerWritten
            }
            Err(e) => {
                error!("Failed to write error marker: {}", e);
                RecordOutcome::Abandoned
            }
        }
    }
}
