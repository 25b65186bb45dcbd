// Logging setup
//
// Wraps flexi_logger initialization and shutdown so async log writes are
// flushed before the process exits.

use std::sync::Mutex;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

use crate::config::Config;
use crate::core::error::{GraphError, GraphResult};

static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// Initialize the file logger from the application config.
pub fn init(config: &Config) -> GraphResult<()> {
    let handle = Logger::try_with_str(&config.log_level)
        .map_err(|e| GraphError::Config(e.to_string()))?
        .log_to_file(
            FileSpec::default()
                .basename(&config.log_file)
                .directory(&config.log_dir),
        )
        .rotate(
            Criterion::Size(config.max_log_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.max_log_files),
        )
        .write_mode(WriteMode::Async)
        .append()
        .start()
        .map_err(|e| GraphError::Config(e.to_string()))?;

    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        *guard = Some(handle);
    }

    log::info!("logging initialized: {}/{}", config.log_dir, config.log_file);
    Ok(())
}

/// Flush and shut down the logger. Blocks until the async writer has
/// drained; call once before process exit.
pub fn shutdown() {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(handle) = guard.take() {
            handle.flush();
        }
    }
}
