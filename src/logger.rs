mod config;
mod entry;
pub(crate) mod error;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub use config::{Config, DEFAULT_LANGUAGE, DEFAULT_LOG_PATH};
pub use entry::{format_timestamp, LogEntry};
pub use error::WriteLogError;

/// Appends to a single file, creating it if needed. Each call opens, writes
/// and closes the file; nothing is held between calls.
#[derive(Debug, Clone)]
pub struct AppendLogger {
    path: PathBuf,
}

impl AppendLogger {
    pub fn new<P: AsRef<Path>>(path: P) -> AppendLogger {
        AppendLogger { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_log(&self, message: &str) -> Result<(), WriteLogError> {
        write_log(&self.path, message)
    }

    pub fn append_entry(&self, entry: &LogEntry) -> Result<(), WriteLogError> {
        self.write_log(&entry.render()?)
    }
}

/// Appends `message` verbatim to the file at `path`.
///
/// The file is created (mode 0644 on unix, before umask) when missing; its
/// parent directory is not. A failed write leaves whatever bytes reached the
/// file in place.
pub fn write_log<P: AsRef<Path>>(path: P, message: &str) -> Result<(), WriteLogError> {
    let path = path.as_ref();

    let mut opts = OpenOptions::new();
    opts.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o644);
    }

    debug!("opening {} for append", path.display());
    let mut file = opts.open(path).map_err(|e| WriteLogError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;

    // single write request so concurrent appenders don't split an entry
    file.write_all(message.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| WriteLogError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

    debug!("appended {} bytes to {}", message.len(), path.display());
    Ok(())
}

pub fn run(cfg: &Config) -> Result<(), WriteLogError> {
    let entry = LogEntry::now(cfg.language.as_str());
    AppendLogger::new(&cfg.path).append_entry(&entry)
}
