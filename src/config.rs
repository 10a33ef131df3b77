use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_TARGET_LANG: &str = "es";
pub const DEFAULT_SOURCE_LANG: &str = "auto";

/// Process-wide configuration, read once at cold start.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub output_bucket: String,
    pub default_target_langs: Vec<String>,
    pub translate_backend: TranslateBackend,
    pub failure_policy: FailurePolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateBackend {
    /// Amazon Translate through the AWS SDK
    Aws,
    /// JSON translation sidecar reachable over HTTP
    Http { base_url: String },
}

/// What the handler reports back to the Lambda platform when a record fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log and acknowledge the event regardless of per-record failures.
    Log,
    /// Fail the invocation when a record was dropped without an error marker.
    Propagate,
}

/// Raw environment values as deserialized by the `config` crate.
#[derive(Debug, Deserialize)]
struct EnvSettings {
    output_bucket: Option<String>,
    #[serde(default = "default_target_langs")]
    default_target_langs: String,
    #[serde(default = "default_translate_backend")]
    translate_backend: String,
    translate_service_url: Option<String>,
    #[serde(default = "default_failure_policy")]
    failure_policy: String,
}

fn default_target_langs() -> String {
    DEFAULT_TARGET_LANG.to_string()
}

fn default_translate_backend() -> String {
    "aws".to_string()
}

fn default_failure_policy() -> String {
    "log".to_string()
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(config::Environment::default())
    }

    fn from_environment(environment: config::Environment) -> Result<Self, ConfigError> {
        let settings: EnvSettings = config::Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        let output_bucket = settings
            .output_bucket
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .ok_or(ConfigError::MissingOutputBucket)?;

        let translate_backend = match settings.translate_backend.trim().to_lowercase().as_str() {
            "aws" => TranslateBackend::Aws,
            "http" => TranslateBackend::Http {
                base_url: settings
                    .translate_service_url
                    .map(|u| u.trim().trim_end_matches('/').to_string())
                    .filter(|u| !u.is_empty())
                    .ok_or(ConfigError::MissingServiceUrl)?,
            },
            other => return Err(ConfigError::UnsupportedBackend(other.to_string())),
        };

        let failure_policy = match settings.failure_policy.trim().to_lowercase().as_str() {
            "log" => FailurePolicy::Log,
            "propagate" => FailurePolicy::Propagate,
            other => return Err(ConfigError::UnsupportedFailurePolicy(other.to_string())),
        };

        Ok(Self {
            output_bucket,
            default_target_langs: parse_language_list(&settings.default_target_langs),
            translate_backend,
            failure_policy,
        })
    }
}

/// Split a comma-separated language list, falling back to the default tag
/// when nothing usable remains.
pub fn parse_language_list(raw: &str) -> Vec<String> {
    let langs: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    if langs.is_empty() {
        vec![DEFAULT_TARGET_LANG.to_string()]
    } else {
        langs
    }
}
