//! Process configuration: root directory, cache directory and flags.
//!
//! Built once and passed to whatever needs it. Defaults are resolved when the
//! [`Config`] is built, not on first use.

use std::path::{Path, PathBuf};

/// Default root directory.
pub const DEFAULT_ROOTDIR: &str = "/";

/// Cache directory, relative to the root directory.
pub const CACHE_PATH: &str = "var/cache/xbps";

/// Metadata directory, relative to the root directory.
pub const META_PATH: &str = "var/db/xbps";

/// Environment variable overriding the root directory.
pub const ROOTDIR_ENV: &str = "XPKG_ROOTDIR";

/// Environment variable overriding the cache directory (relative to root).
pub const CACHEDIR_ENV: &str = "XPKG_CACHEDIR";

/// Print extra detail about each operation.
pub const FLAG_VERBOSE: u32 = 1 << 0;

/// Skip interactive confirmation.
pub const FLAG_FORCE: u32 = 1 << 1;

/// Errors from building a [`Config`].
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A directory override was set to an empty string.
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    rootdir: PathBuf,
    cachedir: PathBuf,
    flags: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Config {
    /// Start building a configuration.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Build from [`ROOTDIR_ENV`] and [`CACHEDIR_ENV`], falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Empty`] if either variable is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(ConfigBuilder::from_env()?.build())
    }

    /// Root directory all other paths live under.
    pub fn rootdir(&self) -> &Path {
        &self.rootdir
    }

    /// Directory where downloaded binary packages are kept.
    pub fn cachedir(&self) -> &Path {
        &self.cachedir
    }

    /// Directory holding package metadata and repository indexes.
    pub fn metadir(&self) -> PathBuf {
        self.rootdir.join(META_PATH)
    }

    /// Caller-defined flag bits.
    pub fn flags(&self) -> u32 {
        self.flags
    }

    /// Whether every bit of `flag` is set.
    pub fn has_flag(&self, flag: u32) -> bool {
        self.flags & flag == flag
    }
}

fn env_override(var: &'static str) -> Result<Option<String>, ConfigError> {
    match std::env::var(var) {
        Ok(val) if val.is_empty() => Err(ConfigError::Empty(var)),
        Ok(val) => Ok(Some(val)),
        Err(_) => Ok(None),
    }
}

/// Builder for [`Config`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    rootdir: Option<PathBuf>,
    cachedir: Option<PathBuf>,
    flags: u32,
}

impl ConfigBuilder {
    /// Builder seeded from [`ROOTDIR_ENV`] and [`CACHEDIR_ENV`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Empty`] if either variable is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::default();
        if let Some(root) = env_override(ROOTDIR_ENV)? {
            builder = builder.rootdir(root);
        }
        if let Some(cache) = env_override(CACHEDIR_ENV)? {
            builder = builder.cachedir(cache);
        }
        Ok(builder)
    }

    /// Set the root directory. Defaults to [`DEFAULT_ROOTDIR`].
    pub fn rootdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.rootdir = Some(dir.into());
        self
    }

    /// Set the cache directory. It is always placed under the root directory,
    /// even when given as an absolute path. Defaults to [`CACHE_PATH`].
    pub fn cachedir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cachedir = Some(dir.into());
        self
    }

    /// Set the flag bits.
    pub fn flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    /// Resolve defaults and produce the configuration.
    pub fn build(self) -> Config {
        let rootdir = self
            .rootdir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOTDIR));
        let cache = self.cachedir.unwrap_or_else(|| PathBuf::from(CACHE_PATH));
        let cachedir = under_root(&rootdir, &cache);
        Config {
            rootdir,
            cachedir,
            flags: self.flags,
        }
    }
}

fn under_root(root: &Path, dir: &Path) -> PathBuf {
    let relative = dir.strip_prefix("/").unwrap_or(dir);
    root.join(relative)
}
