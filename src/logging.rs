//! Logging bootstrap
//!
//! Logs go to stderr, or to rotating files when a log directory is
//! configured. Stdout is never written: it carries the MCP protocol.
//! Initialization happens at most once per process.

use anyhow::{Context, Result, bail};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "folder-todo";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    spec: String,
    log_dir: Option<PathBuf>,
    _logger: LoggerHandle,
}

/// Start the logger with a level or flexi_logger spec
///
/// Calling again with the same arguments is a no-op; different arguments
/// are rejected because the backend cannot be swapped once running.
pub fn init_logging(spec: &str, log_dir: Option<&Path>) -> Result<()> {
    let spec = spec.trim();
    if spec.is_empty() {
        bail!("log level cannot be empty");
    }

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState> {
        let logger = Logger::try_with_env_or_str(spec)
            .with_context(|| format!("invalid log level `{spec}`"))?;

        let logger = match log_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir).with_context(|| {
                    format!("failed to create log directory `{}`", dir.display())
                })?;
                logger
                    .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
                    .rotate(
                        Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                        Naming::Numbers,
                        Cleanup::KeepLogFiles(MAX_LOG_FILES),
                    )
                    .write_mode(WriteMode::BufferAndFlush)
                    .append()
                    .format_for_files(flexi_logger::detailed_format)
            }
            None => logger.log_to_stderr().format(flexi_logger::detailed_format),
        };
        let handle = logger.start().context("failed to start logger")?;

        info!(
            "event=app_start status=ok version={} level={}",
            env!("CARGO_PKG_VERSION"),
            spec
        );

        Ok(LoggingState {
            spec: spec.to_string(),
            log_dir: log_dir.map(Path::to_path_buf),
            _logger: handle,
        })
    })?;

    if state.spec != spec || state.log_dir.as_deref() != log_dir {
        bail!(
            "logging already initialized with `{}`; refusing to switch to `{}`",
            state.spec,
            spec
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_level_is_rejected() {
        assert!(init_logging("  ", None).is_err());
    }

    #[test]
    fn test_init_is_idempotent_and_rejects_conflicts() {
        init_logging("info", None).unwrap();
        init_logging("info", None).unwrap();

        let err = init_logging("debug", None).unwrap_err();
        assert!(err.to_string().contains("refusing to switch"));
    }
}
