use crate::error::{AppError, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs a file-backed subscriber. Without a log file nothing is
/// installed, since the terminal owns stdout and stderr while the form runs.
pub fn init(log_file: Option<&Path>, level: Option<&str>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let filter = match level {
        Some(level) => EnvFilter::try_new(level).map_err(|e| AppError::Logging(e.to_string()))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::init;
    use crate::error::AppError;
    use std::path::Path;

    #[test]
    fn no_log_file_is_a_no_op() {
        assert!(init(None, Some("debug")).is_ok());
    }

    #[test]
    fn unwritable_log_file_is_reported() {
        let err = init(Some(Path::new("/nonexistent/dir/form.log")), None).expect_err("open");
        assert!(matches!(err, AppError::LogFile { .. }));
    }
}
