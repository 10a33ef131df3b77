mod config;
mod error;
mod event;
mod handler;
mod processor;
mod storage;
mod translate;

#[cfg(test)]
mod testing;

use anyhow::Context;
use aws_config::BehaviorVersion;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::event::S3Notification;
use crate::handler::EventHandler;
use crate::storage::S3Storage;
use crate::translate::TranslatorFactory;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("s3_translate=info")),
        )
        .with_ansi(false)
        .without_time()
        .init();

    let config = Arc::new(Config::from_env().context("Failed to load configuration")?);
    info!(
        "Loaded configuration: output_bucket={}, default_target_langs={:?}, failure_policy={:?}",
        config.output_bucket, config.default_target_langs, config.failure_policy
    );

    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let storage = Arc::new(S3Storage::new(aws_sdk_s3::Client::new(&sdk_config)));
    let translator = TranslatorFactory::create_translator(&config.translate_backend, &sdk_config);

    let handler = EventHandler::new(config, storage, translator);
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<S3Notification>| async move {
        handler.handle(event.payload).await.map_err(Error::from)
    }))
    .await
}
