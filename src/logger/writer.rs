//! File writer for log output

use std::fs::{self, File, OpenOptions};
use std::sync::Mutex;

use crate::logger::config::FileConfig;
use crate::logger::error::LoggerError;

/// Open the log file described by `config`.
///
/// Missing parent directories are created. The file is appended to or
/// truncated depending on `config.append`. The returned mutex is usable
/// directly as a `tracing_subscriber` writer.
pub(crate) fn open_log_file(config: &FileConfig) -> Result<Mutex<File>, LoggerError> {
    if config.path.as_os_str().is_empty() {
        return Err(LoggerError::config("log file path is empty"));
    }

    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut options = OpenOptions::new();
    options.create(true);
    if config.append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }

    Ok(Mutex::new(options.open(&config.path)?))
}
