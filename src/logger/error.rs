use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteLogError {
    #[error("failed to open file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write to file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to format log entry timestamp")]
    Timestamp {
        #[from]
        source: time::error::Format,
    },
}

impl WriteLogError {
    /// The target file, when the failure happened on it.
    pub fn path(&self) -> Option<&Path> {
        match self {
            WriteLogError::Open { path, .. } | WriteLogError::Write { path, .. } => Some(path),
            WriteLogError::Timestamp { .. } => None,
        }
    }

    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            WriteLogError::Open { source, .. } | WriteLogError::Write { source, .. } => Some(source),
            WriteLogError::Timestamp { .. } => None,
        }
    }
}
