use async_trait::async_trait;
use aws_sdk_translate::error::DisplayErrorContext;
use tracing::{debug, error};

use super::interface::TranslateInterface;
use crate::error::{TranslationError, TranslationResult};

/// Translation client backed by Amazon Translate
pub struct AwsTranslateClient {
    client: aws_sdk_translate::Client,
}

impl AwsTranslateClient {
    pub fn new(client: aws_sdk_translate::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TranslateInterface for AwsTranslateClient {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationResult<String> {
        debug!(
            "Sending TranslateText request: source={}, target={}, chars={}",
            source_lang,
            target_lang,
            text.chars().count()
        );

        let output = self
            .client
            .translate_text()
            .text(text)
            .source_language_code(source_lang)
            .target_language_code(target_lang)
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                error!("Translate API error: {}", message);
                TranslationError::Service {
                    source_lang: source_lang.to_string(),
                    target_lang: target_lang.to_string(),
                    message,
                }
            })?;

        Ok(output.translated_text().to_string())
    }
}
