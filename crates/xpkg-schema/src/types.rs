//! Installed-package records and their lifecycle states.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle stage of an entry in the installed-package database.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PkgState {
    /// Files extracted, configuration not yet run.
    Unpacked,
    /// Interrupted during installation.
    HalfInstalled,
    /// Fully installed and configured.
    Installed,
    /// Interrupted during removal.
    HalfRemoved,
    /// Removed, but configuration files were kept.
    ConfigFiles,
    /// State could not be determined.
    #[default]
    Unknown,
}

impl PkgState {
    /// Every state, in lifecycle order.
    pub const ALL: [PkgState; 6] = [
        PkgState::Unpacked,
        PkgState::HalfInstalled,
        PkgState::Installed,
        PkgState::HalfRemoved,
        PkgState::ConfigFiles,
        PkgState::Unknown,
    ];

    /// Canonical string name, as stored in the package database.
    pub fn as_str(self) -> &'static str {
        match self {
            PkgState::Unpacked => "unpacked",
            PkgState::HalfInstalled => "half-installed",
            PkgState::Installed => "installed",
            PkgState::HalfRemoved => "half-removed",
            PkgState::ConfigFiles => "config-files",
            PkgState::Unknown => "unknown",
        }
    }

    /// Only [`PkgState::Installed`] counts for dependency resolution.
    pub fn is_fully_installed(self) -> bool {
        self == PkgState::Installed
    }
}

impl std::fmt::Display for PkgState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized state name.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Unknown package state: '{0}'")]
pub struct ParseStateError(pub String);

impl FromStr for PkgState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PkgState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| ParseStateError(s.to_string()))
    }
}

/// An installed-package entry as handed out by a package store.
///
/// The store owns the authoritative data; this is a point-in-time copy.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PackageRecord {
    /// Lifecycle state of the entry.
    pub state: PkgState,

    /// Canonical identifier, e.g. `foo-1.2.3_1`. Missing only if the store is corrupt.
    pub pkgver: Option<String>,

    /// Run-time dependency patterns.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub run_depends: Vec<String>,
}

impl PackageRecord {
    /// Record for an identifier in the given state, with no dependencies.
    pub fn new(state: PkgState, pkgver: impl Into<String>) -> Self {
        Self {
            state,
            pkgver: Some(pkgver.into()),
            run_depends: Vec::new(),
        }
    }

    /// Attach run-time dependency patterns.
    pub fn with_run_depends<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.run_depends = deps.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the package declares any run-time dependencies.
    pub fn has_run_depends(&self) -> bool {
        !self.run_depends.is_empty()
    }
}
