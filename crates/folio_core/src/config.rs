//! Content runtime configuration.
//!
//! Resolved once at startup and passed into services; the library never reads
//! environment variables on its own.

use crate::aggregate::writings::RECENT_WRITINGS_DEFAULT;
use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Sub-directory of the content root holding per-entry detail files.
pub const DETAIL_DIR_NAME: &str = "details";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyContentDir,
    ZeroRecentWritings,
    InvalidLogLevel(String),
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContentDir => write!(f, "content_dir cannot be empty"),
            Self::ZeroRecentWritings => write!(f, "recent_writings must be at least 1"),
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
            Self::RelativeLogDir(path) => {
                write!(f, "log_dir must be an absolute path, got `{}`", path.display())
            }
        }
    }
}

impl Error for ConfigError {}

/// Startup configuration for loading and serving portfolio content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    content_dir: PathBuf,
    detail_dir: PathBuf,
    detail_db: Option<PathBuf>,
    recent_writings: usize,
    log_level: &'static str,
    log_dir: Option<PathBuf>,
}

impl ContentConfig {
    /// Creates a configuration rooted at `content_dir` with defaults:
    /// details under `<content_dir>/details`, three recent writings, the
    /// build-mode log level and no file logging.
    pub fn new(content_dir: impl Into<PathBuf>) -> ConfigResult<Self> {
        let content_dir = content_dir.into();
        if content_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyContentDir);
        }
        Ok(Self {
            detail_dir: content_dir.join(DETAIL_DIR_NAME),
            content_dir,
            detail_db: None,
            recent_writings: RECENT_WRITINGS_DEFAULT,
            log_level: default_log_level(),
            log_dir: None,
        })
    }

    pub fn with_detail_dir(mut self, detail_dir: impl Into<PathBuf>) -> Self {
        self.detail_dir = detail_dir.into();
        self
    }

    /// Serves detail records from a SQLite database instead of files.
    pub fn with_detail_db(mut self, detail_db: impl Into<PathBuf>) -> Self {
        self.detail_db = Some(detail_db.into());
        self
    }

    pub fn with_recent_writings(mut self, recent_writings: usize) -> ConfigResult<Self> {
        if recent_writings == 0 {
            return Err(ConfigError::ZeroRecentWritings);
        }
        self.recent_writings = recent_writings;
        Ok(self)
    }

    /// Sets the log level and, optionally, an absolute log directory.
    pub fn with_logging(mut self, level: &str, log_dir: Option<PathBuf>) -> ConfigResult<Self> {
        self.log_level = normalize_level(level).map_err(ConfigError::InvalidLogLevel)?;
        if let Some(dir) = &log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir.clone()));
            }
        }
        self.log_dir = log_dir;
        Ok(self)
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    pub fn detail_dir(&self) -> &Path {
        &self.detail_dir
    }

    pub fn detail_db(&self) -> Option<&Path> {
        self.detail_db.as_deref()
    }

    pub fn recent_writings(&self) -> usize {
        self.recent_writings
    }

    pub fn log_level(&self) -> &'static str {
        self.log_level
    }

    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}
