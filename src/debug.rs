use std::io::Write;

use flexi_logger::{DeferredNow, FileSpec, FlexiLoggerError, Logger, LoggerHandle};
use log::Record;

/// Log to `gridfried_<timestamp>.log` if asked to, else to stderr, where it cannot mix with the
/// rendered tables on stdout.
pub fn cli_logger(log_to_file: bool) -> Result<LoggerHandle, FlexiLoggerError> {
    if log_to_file {
        Logger::try_with_env_or_str("info")?
            .log_to_file(FileSpec::default())
            .start()
    } else {
        Logger::try_with_env_or_str("warn")?
            .log_to_stderr()
            .format(plain_format)
            .start()
    }
}

fn plain_format(
    w: &mut dyn Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] {}: {}",
        record.level(),
        record.module_path().unwrap_or("<unknown>"),
        record.args()
    )
}
