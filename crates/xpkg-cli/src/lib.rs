//! xpkg - package artifact digests and identifier inspection
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
//!
//! Thin command-line front end over `xpkg-core`: hash and verify binary
//! packages, split package identifiers and dependency patterns, and show the
//! directories a given root/cache configuration resolves to.

pub mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use xpkg_core::config::{ConfigBuilder, FLAG_FORCE, FLAG_VERBOSE};
use xpkg_core::Config;
use xpkg_schema::Sha256Hash;

#[derive(Debug, Parser)]
#[command(name = "xpkg")]
#[command(author, version, about = "xpkg - package digests and identifiers")]
pub struct Cli {
    /// Root directory (overrides XPKG_ROOTDIR)
    #[arg(long, short = 'r', global = true, value_name = "DIR")]
    pub rootdir: Option<PathBuf>,

    /// Cache directory, relative to the root (overrides XPKG_CACHEDIR)
    #[arg(long, short = 'c', global = true, value_name = "DIR")]
    pub cachedir: Option<PathBuf>,

    /// Print extra detail
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Never ask for confirmation
    #[arg(short, long, global = true)]
    pub force: bool,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Resolve the configuration: environment first, then command-line flags.
    pub fn config(&self) -> Result<Config> {
        let mut builder = ConfigBuilder::from_env()?;
        if let Some(root) = &self.rootdir {
            builder = builder.rootdir(root);
        }
        if let Some(cache) = &self.cachedir {
            builder = builder.cachedir(cache);
        }

        let mut flags = 0;
        if self.verbose {
            flags |= FLAG_VERBOSE;
        }
        if self.force {
            flags |= FLAG_FORCE;
        }
        Ok(builder.flags(flags).build())
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute the SHA256 hash of files
    Hash {
        /// Files to hash
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Check a file against an expected SHA256 hash
    Verify {
        /// File to check
        file: PathBuf,
        /// Expected digest, 64 lowercase hex characters
        sha256: Sha256Hash,
        /// Offer to delete the file if it does not match
        #[arg(long)]
        delete: bool,
    },
    /// Split package identifiers (name-version_revision)
    Pkgver {
        /// Identifiers, e.g. foo-1.2.3_1
        #[arg(required = true)]
        pkgvers: Vec<String>,
    },
    /// Split dependency patterns (name>=version)
    Pattern {
        /// Patterns, e.g. foo>=1.2
        #[arg(required = true)]
        patterns: Vec<String>,
    },
    /// Show resolved directories and repository paths
    Paths {
        /// Repository location (URL or local directory)
        #[arg(long)]
        repo: Option<String>,
        /// Binary package file name, resolved against --repo
        #[arg(long, requires = "repo")]
        binpkg: Option<String>,
    },
}
