//! Cache command handler
//!
//! Runs `set`, `get` and `roundtrip` against the store selected by
//! `[store] backend`.

use std::future::Future;

use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::cache::{Ocean, OceanError, OceanOptions, StoreOcean, connect_store};
use crate::cli::parser::Commands;
use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};

/// Handler for the commands that touch the store
pub struct CacheCommandHandler {
    config: Settings,
    cancel: CancellationToken,
}

impl CacheCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self {
            config,
            cancel: CancellationToken::new(),
        }
    }

    /// Abort the pending store call when `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Connect the configured store and run `command` against it
    ///
    /// The store is dropped once the command finishes.
    pub async fn execute(&self, command: &Commands) -> AppResult<()> {
        let store = connect_store(&self.config.store, &self.config.redis).await?;
        tracing::debug!(backend = self.config.store.backend.as_str(), "store connected");

        let ocean = StoreOcean::with_options(store, OceanOptions::from_settings(&self.config.cache));
        if let Some(output) = self.run(&ocean, command).await? {
            println!("{output}");
        }
        Ok(())
    }

    /// Run `command` against `ocean`, returning what should be printed
    pub async fn run<O: Ocean>(&self, ocean: &O, command: &Commands) -> AppResult<Option<String>> {
        match command {
            Commands::Set { key, value } => {
                let value = parse_value(value);
                self.bounded(ocean.set(key, &value)).await?;
                tracing::info!(key = %key, "value stored");
                Ok(None)
            }
            Commands::Get { key } => {
                let value: Value = self.bounded(ocean.get(key)).await?;
                Ok(Some(value.to_string()))
            }
            Commands::Roundtrip { key, value } => {
                self.bounded(ocean.set(key, value.as_str())).await?;
                let read: String = self.bounded(ocean.get(key)).await?;
                tracing::info!(key = %key, value = %read, "roundtrip completed");
                Ok(Some(read))
            }
            Commands::Check => Err(AppError::validation(
                "command",
                "check does not access the store",
            )),
        }
    }

    /// Bound a facade call by the configured deadline and the cancellation token
    async fn bounded<T, F>(&self, call: F) -> AppResult<T>
    where
        F: Future<Output = Result<T, OceanError>>,
    {
        let deadline = self.config.cache.operation_timeout();
        let guarded = async {
            match deadline {
                Some(limit) => match tokio::time::timeout(limit, call).await {
                    Ok(result) => result.map_err(AppError::from),
                    Err(_) => {
                        tracing::warn!(timeout = ?limit, "operation timed out");
                        Err(AppError::Timeout(limit))
                    }
                },
                None => call.await.map_err(AppError::from),
            }
        };

        tokio::select! {
            _ = self.cancel.cancelled() => {
                tracing::warn!("operation cancelled");
                Err(AppError::Cancelled)
            }
            result = guarded => result,
        }
    }
}

/// Parse CLI input as JSON, keeping it as a plain string otherwise
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
