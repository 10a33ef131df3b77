use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::TranslationResult;

/// Translate request sent to the HTTP translation service
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

/// Translate response returned by the HTTP translation service
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    #[serde(default)]
    pub translated_text: String,
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Translation interface trait
#[async_trait]
pub trait TranslateInterface: Send + Sync {
    /// Translate a single piece of text
    ///
    /// # Arguments
    /// * `text` - Non-empty text to translate
    /// * `source_lang` - Source language tag, or `"auto"` to let the service detect it
    /// * `target_lang` - Target language tag
    ///
    /// # Returns
    /// The translated text
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationResult<String>;
}
