//! Core library for xpkg.
//!
//! - [`digest`]: SHA-256 hashing and verification of package artifacts.
//! - [`resolver`]: whether a dependency pattern is satisfied by what is installed.
//! - [`config`] and [`paths`]: root/cache directories and repository file locations.
//! - [`prompt`]: yes/no questions for interactive front ends.

pub mod config;
pub mod digest;
pub mod paths;
pub mod prompt;
pub mod resolver;

pub use config::Config;
pub use digest::{DigestError, Verification, hash_file, verify_file};
pub use resolver::{
    Classification, PackageStore, PatternMatch, PatternMatcher, ResolveError, Resolver, StoreError,
};

/// Re-exported shared types.
pub use xpkg_schema as schema;
