//! Check command handler
//!
//! Dry run: validates the merged settings and prints what a store command
//! would use, without connecting anywhere.

use crate::config::settings::{Settings, StoreBackend};
use crate::error::AppResult;

/// Handler for the check command
pub struct CheckCommandHandler {
    config: Settings,
}

impl CheckCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    pub async fn execute(&self) -> AppResult<()> {
        for line in self.report()? {
            println!("{line}");
        }
        Ok(())
    }

    /// Validate and describe the effective settings, one line each
    pub fn report(&self) -> AppResult<Vec<String>> {
        self.config.validate()?;

        let cache = &self.config.cache;
        let mut lines = vec!["✓ Configuration is valid".to_string()];

        match self.config.store.backend {
            StoreBackend::Redis => lines.push(format!(
                "✓ Store: redis at {} (pool size {})",
                self.config.redis.redacted_url(),
                self.config.redis.pool_size
            )),
            StoreBackend::Memory => lines.push("✓ Store: in-process memory".to_string()),
        }

        lines.push(match cache.expiration_seconds {
            0 => "✓ Expiration: never".to_string(),
            secs => format!("✓ Expiration: {secs}s"),
        });
        lines.push(match cache.key_prefix.as_deref().filter(|p| !p.is_empty()) {
            Some(prefix) => format!("✓ Key prefix: {prefix}"),
            None => "✓ Key prefix: none".to_string(),
        });
        if let Some(timeout) = cache.operation_timeout {
            lines.push(format!("✓ Operation timeout: {timeout}s"));
        }
        lines.push(format!("✓ Log level: {}", self.config.logger.level));

        Ok(lines)
    }
}
