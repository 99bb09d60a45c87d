//! File logging for hosts.
//!
//! Library code only uses the `log` macros; a host that wants the output
//! calls `init_file` once at startup.

use std::fs::File;
use std::path::{Path, PathBuf};

use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Failed to create log file {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("A logger is already installed")]
    AlreadySet(#[from] log::SetLoggerError),
}

/// Send all log output at `level` and above to a freshly truncated file.
pub fn init_file(path: impl AsRef<Path>, level: LevelFilter) -> Result<(), LogError> {
    let path = path.as_ref();
    let log_file = File::create(path).map_err(|source| LogError::File {
        path: path.to_path_buf(),
        source,
    })?;
    WriteLogger::init(level, Config::default(), log_file)?;
    log::info!("[logging] writing to {}", path.display());
    Ok(())
}
