use std::sync::Arc;
use tracing::info;

use super::aws_client::AwsTranslateClient;
use super::http_client::HttpTranslateClient;
use super::interface::TranslateInterface;
use crate::config::TranslateBackend;

/// Factory for creating translation clients
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Create a translation client for the configured backend
    ///
    /// # Arguments
    /// * `backend` - Backend selected in configuration
    /// * `sdk_config` - Shared AWS SDK configuration
    pub fn create_translator(
        backend: &TranslateBackend,
        sdk_config: &aws_config::SdkConfig,
    ) -> Arc<dyn TranslateInterface> {
        match backend {
            TranslateBackend::Aws => {
                info!("Initializing translator: Amazon Translate");
                Arc::new(AwsTranslateClient::new(aws_sdk_translate::Client::new(
                    sdk_config,
                )))
            }
            TranslateBackend::Http { base_url } => {
                info!("Initializing translator: HTTP service at {}", base_url);
                Arc::new(HttpTranslateClient::new(base_url.clone()))
            }
        }
    }
}
