use anyhow::Result;
use flexi_logger::{opt_format, Logger, LoggerHandle};

/// Log to stderr so stdout carries only protocol responses. The level comes
/// from `RUST_LOG`, falling back to "warn".
pub fn setup_logging() -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str("warn")?
        .log_to_stderr()
        .format(opt_format)
        .start()?;
    Ok(handle)
}
