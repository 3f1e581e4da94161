use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_PATH: &str = "MYFILE.txt";
pub const DEFAULT_LANGUAGE: &str = "Rust";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub language: String,
}

impl Config {
    pub fn new<P: AsRef<Path>>(path: P) -> Config {
        Config {
            path: path.as_ref().to_path_buf(),
            language: String::from(DEFAULT_LANGUAGE),
        }
    }

    pub fn with_language<S: Into<String>>(mut self, language: S) -> Config {
        self.language = language.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_LOG_PATH)
    }
}
