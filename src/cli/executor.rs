//! Command executor for dispatching CLI commands

use tokio_util::sync::CancellationToken;

use super::handlers::{CacheCommandHandler, CheckCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};

/// Execute the parsed command with merged settings
///
/// Store commands stop early when `cancel` fires.
///
/// # Errors
/// Returns validation failures or whatever the handler reports
pub async fn execute_command(
    cli: &Cli,
    settings: Settings,
    cancel: CancellationToken,
) -> AppResult<()> {
    cli.validate()
        .map_err(|reason| AppError::validation("cli_arguments", reason))?;

    match cli.resolved_command() {
        Commands::Check => CheckCommandHandler::new(settings).execute().await,
        command => {
            CacheCommandHandler::new(settings)
                .with_cancellation(cancel)
                .execute(&command)
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreBackend;
    use clap::Parser;

    fn memory_config() -> Settings {
        let mut config = Settings::default();
        config.store.backend = StoreBackend::Memory;
        config
    }

    #[tokio::test]
    async fn test_execute_check() {
        let cli = Cli::try_parse_from(["ocean", "check"]).unwrap();
        let result = execute_command(&cli, Settings::default(), CancellationToken::new()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_execute_default_roundtrip_on_memory() {
        let cli = Cli::try_parse_from(["ocean"]).unwrap();
        let result = execute_command(&cli, memory_config(), CancellationToken::new()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_execute_get_missing_on_fresh_store() {
        // Each execution connects its own memory store
        let cli = Cli::try_parse_from(["ocean", "get", "nothing"]).unwrap();
        let err = execute_command(&cli, memory_config(), CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[tokio::test]
    async fn test_execute_rejects_invalid_args() {
        let cli = Cli::try_parse_from(["ocean", "set", "k", ""]).unwrap();
        let err = execute_command(&cli, memory_config(), CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
