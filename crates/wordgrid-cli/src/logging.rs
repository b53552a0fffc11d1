use std::path::PathBuf;

use anyhow::Context as _;
use flexi_logger::{
    Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, default_format, opt_format,
};

/// Level used when `RUST_LOG` is not set.
const DEFAULT_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LogTarget {
    /// Rotating `wordgrid_*.log` files in the given directory.
    File(PathBuf),
    /// Warnings and errors only, on stderr.
    Stderr,
    Off,
}

/// Starts the global logger. Logging stops when the returned handle is dropped.
pub(crate) fn init(target: &LogTarget) -> anyhow::Result<Option<LoggerHandle>> {
    let handle = match target {
        LogTarget::File(dir) => Logger::try_with_env_or_str(DEFAULT_LEVEL)
            .context("Invalid log specification")?
            .log_to_file(FileSpec::default().directory(dir).basename("wordgrid"))
            .format(opt_format)
            .rotate(
                Criterion::Size(10 * 1024 * 1024),
                Naming::Numbers,
                Cleanup::KeepLogFiles(3),
            )
            .start()
            .with_context(|| format!("Failed to start logging to {}", dir.display()))?,
        LogTarget::Stderr => Logger::try_with_str("warn")
            .context("Invalid log specification")?
            .log_to_stderr()
            .format(default_format)
            .start()
            .context("Failed to start logging")?,
        LogTarget::Off => return Ok(None),
    };
    Ok(Some(handle))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_off_starts_nothing() {
        assert!(init(&LogTarget::Off).unwrap().is_none());
    }

    #[test]
    fn test_file_logging() {
        let dir = tempfile::tempdir().unwrap();
        let handle = init(&LogTarget::File(dir.path().to_owned()))
            .unwrap()
            .unwrap();

        log::warn!("file logging test");
        handle.flush();

        let contents = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| fs::read_to_string(entry.unwrap().path()).unwrap())
            .collect::<String>();
        assert!(contents.contains("file logging test"));
    }
}
