//! Shared types for xpkg.
//!
//! Digests, package identifiers (`name-version_revision`), dependency
//! patterns (`name>=version`) and installed-package records. Nothing in this
//! crate touches the filesystem.

pub mod hash;
pub mod pattern;
pub mod pkgver;
pub mod types;

// Re-exports
pub use hash::*;
pub use pattern::{PkgPattern, pattern_constraint, pattern_name};
pub use pkgver::{PkgVer, pkg_epoch, pkg_name, pkg_revision, pkg_version};
pub use types::*;
