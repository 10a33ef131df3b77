use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use super::interface::{TranslateInterface, TranslateRequest, TranslateResponse};
use crate::error::{TranslationError, TranslationResult};

/// Translation client that talks to a JSON translation service over HTTP
#[derive(Debug, Clone)]
pub struct HttpTranslateClient {
    client: Client,
    base_url: String,
}

impl HttpTranslateClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    async fn send(&self, request: &TranslateRequest) -> Result<TranslateResponse, reqwest::Error> {
        let url = format!("{}/translate", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        response.json().await
    }
}

#[async_trait]
impl TranslateInterface for HttpTranslateClient {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationResult<String> {
        let request = TranslateRequest {
            text: text.to_string(),
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
        };

        debug!(
            "Sending translate request to {}: source={}, target={}",
            self.base_url, source_lang, target_lang
        );

        let service_error = |message: String| TranslationError::Service {
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
            message,
        };

        let response = self.send(&request).await.map_err(|e| {
            error!("Translate service request failed: {}", e);
            service_error(e.to_string())
        })?;

        if response.success {
            Ok(response.translated_text)
        } else {
            let error_msg = response.error.unwrap_or_else(|| "Unknown error".to_string());
            error!("Translate service reported failure: {}", error_msg);
            Err(service_error(error_msg))
        }
    }
}
