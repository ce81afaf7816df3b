use clap::Parser;
use tokio_util::sync::CancellationToken;

use ocean::cli::{Cli, execute_command, init_logger_from_settings, load_and_merge_config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match load_and_merge_config(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {e:#}");
            std::process::exit(78);
        }
    };

    if let Err(e) = init_logger_from_settings(&settings) {
        eprintln!("Logger initialization error: {e:#}");
        std::process::exit(1);
    }

    tracing::debug!(
        version = ocean::pkg_version(),
        backend = settings.store.backend.as_str(),
        "starting"
    );

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_signal.cancel();
        }
    });

    if let Err(e) = execute_command(&cli, settings, cancel).await {
        let code = e.exit_code();
        let e = anyhow::Error::from(e);
        tracing::error!("command failed: {e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(code);
    }

    Ok(())
}
