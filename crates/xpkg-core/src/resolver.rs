//! Installed-state resolution of dependency patterns.
//!
//! Given a pattern such as `foo>=1.2`, look up `foo` in the installed-package
//! store and decide whether the installed build satisfies the pattern. The
//! store and the version comparison are collaborators behind
//! [`PackageStore`] and [`PatternMatcher`]; this module only sequences them.

use xpkg_schema::{PackageRecord, PkgPattern};

/// Failure reported by a [`PackageStore`] other than "no such package".
#[derive(thiserror::Error, Debug)]
#[error("Package store lookup failed: {0}")]
pub struct StoreError(pub String);

/// Read-only view of the installed-package database.
pub trait PackageStore {
    /// Fetch the record for `name`.
    ///
    /// Returns `Ok(None)` when no such package is registered. Each call is an
    /// independent point-in-time read.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the database cannot be read.
    fn lookup(&self, name: &str) -> Result<Option<PackageRecord>, StoreError>;
}

/// Result of testing an identifier against a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternMatch {
    /// The identifier satisfies the pattern.
    Matches,
    /// The identifier does not satisfy the pattern.
    NoMatch,
    /// The pattern could not be interpreted.
    Malformed,
}

/// Version-aware comparison of a package identifier against a pattern.
pub trait PatternMatcher {
    /// Test `pkgver` (e.g. `foo-1.2.3_1`) against `pattern` (e.g. `foo>=1.2`).
    fn matches(&self, pkgver: &str, pattern: &str) -> PatternMatch;
}

/// Installed state of a dependency pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// No record, or a record that is not fully installed.
    NotInstalled,
    /// Installed, and the installed build satisfies the pattern.
    InstalledMatching,
    /// Installed, but the installed build does not satisfy the pattern.
    InstalledNotMatching,
}

/// Errors from installed-state resolution.
#[derive(thiserror::Error, Debug)]
pub enum ResolveError {
    /// No package name could be extracted from the pattern.
    #[error("Invalid package pattern: '{0}'")]
    InvalidPattern(String),

    /// The store failed for a reason other than a missing package.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The store returned a record without a `pkgver`.
    #[error("Installed package '{0}' has no pkgver")]
    InstalledIdentifierMissing(String),

    /// The matcher rejected the pattern.
    #[error("Malformed package pattern: '{0}'")]
    Malformed(String),
}

/// Sequences a [`PackageStore`] lookup and a [`PatternMatcher`] check.
#[derive(Debug, Clone)]
pub struct Resolver<S, M> {
    store: S,
    matcher: M,
}

impl<S: PackageStore, M: PatternMatcher> Resolver<S, M> {
    /// Build a resolver over the given collaborators.
    pub fn new(store: S, matcher: M) -> Self {
        Self { store, matcher }
    }

    /// Classify `pattern` against the installed package it names.
    ///
    /// Performs exactly one store lookup.
    ///
    /// # Errors
    ///
    /// See [`classify`].
    pub fn classify(&self, pattern: &str) -> Result<Classification, ResolveError> {
        classify(&self.store, &self.matcher, pattern)
    }

    /// Whether any record exists for `name`, whatever its state.
    ///
    /// # Errors
    ///
    /// See [`is_installed`].
    pub fn is_installed(&self, name: &str) -> Result<bool, ResolveError> {
        is_installed(&self.store, name)
    }
}

/// Classify `pattern` against the installed package it names.
///
/// A record in any state other than installed counts as not installed.
///
/// # Errors
///
/// Returns [`ResolveError::InvalidPattern`] if no name can be extracted,
/// [`ResolveError::Store`] if the lookup fails,
/// [`ResolveError::InstalledIdentifierMissing`] if the record has no
/// `pkgver`, and [`ResolveError::Malformed`] if the matcher rejects the
/// pattern.
pub fn classify<S, M>(store: &S, matcher: &M, pattern: &str) -> Result<Classification, ResolveError>
where
    S: PackageStore + ?Sized,
    M: PatternMatcher + ?Sized,
{
    let name = PkgPattern::new(pattern)
        .name()
        .ok_or_else(|| ResolveError::InvalidPattern(pattern.to_string()))?;

    let Some(record) = store.lookup(&name)? else {
        tracing::debug!(%name, "not registered");
        return Ok(Classification::NotInstalled);
    };

    if !record.state.is_fully_installed() {
        tracing::debug!(%name, state = %record.state, "registered but not fully installed");
        return Ok(Classification::NotInstalled);
    }

    let pkgver = record
        .pkgver
        .ok_or(ResolveError::InstalledIdentifierMissing(name))?;

    match matcher.matches(&pkgver, pattern) {
        PatternMatch::Matches => Ok(Classification::InstalledMatching),
        PatternMatch::NoMatch => {
            tracing::debug!(%pkgver, pattern, "installed version does not satisfy pattern");
            Ok(Classification::InstalledNotMatching)
        }
        PatternMatch::Malformed => Err(ResolveError::Malformed(pattern.to_string())),
    }
}

/// Whether any record exists for `name`, whatever its state.
///
/// # Errors
///
/// Returns [`ResolveError::Store`] if the lookup fails.
pub fn is_installed<S>(store: &S, name: &str) -> Result<bool, ResolveError>
where
    S: PackageStore + ?Sized,
{
    Ok(store.lookup(name)?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::predicate::eq;
    use xpkg_schema::PkgState;

    mock! {
        Store {}
        impl PackageStore for Store {
            fn lookup(&self, name: &str) -> Result<Option<PackageRecord>, StoreError>;
        }
    }

    mock! {
        Matcher {}
        impl PatternMatcher for Matcher {
            fn matches(&self, pkgver: &str, pattern: &str) -> PatternMatch;
        }
    }

    fn store_with(record: Option<PackageRecord>) -> MockStore {
        let mut store = MockStore::new();
        store
            .expect_lookup()
            .with(eq("foo"))
            .times(1)
            .return_once(move |_| Ok(record));
        store
    }

    fn matcher_never_called() -> MockMatcher {
        let mut matcher = MockMatcher::new();
        matcher.expect_matches().never();
        matcher
    }

    fn matcher_returning(result: PatternMatch) -> MockMatcher {
        let mut matcher = MockMatcher::new();
        matcher
            .expect_matches()
            .with(eq("foo-1.2.3_1"), eq("foo>=1.2"))
            .times(1)
            .return_const(result);
        matcher
    }

    #[test]
    fn absent_package_is_not_installed() {
        let resolver = Resolver::new(store_with(None), matcher_never_called());
        assert_eq!(
            resolver.classify("foo>=1.2").unwrap(),
            Classification::NotInstalled
        );
    }

    #[test]
    fn unpacked_package_is_not_installed() {
        let record = PackageRecord::new(PkgState::Unpacked, "foo-1.2.3_1");
        let resolver = Resolver::new(store_with(Some(record)), matcher_never_called());
        assert_eq!(
            resolver.classify("foo>=1.2").unwrap(),
            Classification::NotInstalled
        );
    }

    #[test]
    fn transitional_states_are_not_installed() {
        for state in PkgState::ALL.into_iter().filter(|s| !s.is_fully_installed()) {
            let record = PackageRecord::new(state, "foo-1.2.3_1");
            let result = classify(&store_with(Some(record)), &matcher_never_called(), "foo>=1.2");
            assert_eq!(result.unwrap(), Classification::NotInstalled, "{state}");
        }
    }

    #[test]
    fn installed_and_matching() {
        let record = PackageRecord::new(PkgState::Installed, "foo-1.2.3_1");
        let resolver = Resolver::new(
            store_with(Some(record)),
            matcher_returning(PatternMatch::Matches),
        );
        assert_eq!(
            resolver.classify("foo>=1.2").unwrap(),
            Classification::InstalledMatching
        );
    }

    #[test]
    fn installed_but_not_matching() {
        let record = PackageRecord::new(PkgState::Installed, "foo-1.2.3_1");
        let result = classify(
            &store_with(Some(record)),
            &matcher_returning(PatternMatch::NoMatch),
            "foo>=1.2",
        );
        assert_eq!(result.unwrap(), Classification::InstalledNotMatching);
    }

    #[test]
    fn malformed_pattern_from_matcher() {
        let record = PackageRecord::new(PkgState::Installed, "foo-1.2.3_1");
        let result = classify(
            &store_with(Some(record)),
            &matcher_returning(PatternMatch::Malformed),
            "foo>=1.2",
        );
        assert!(matches!(result, Err(ResolveError::Malformed(p)) if p == "foo>=1.2"));
    }

    #[test]
    fn pattern_without_name_is_invalid() {
        let mut store = MockStore::new();
        store.expect_lookup().never();
        for pattern in ["foo", "", ">=1.0"] {
            let result = classify(&store, &matcher_never_called(), pattern);
            assert!(matches!(result, Err(ResolveError::InvalidPattern(_))));
        }
    }

    #[test]
    fn missing_pkgver_is_integrity_fault() {
        let record = PackageRecord {
            state: PkgState::Installed,
            pkgver: None,
            run_depends: Vec::new(),
        };
        let result = classify(&store_with(Some(record)), &matcher_never_called(), "foo>=1.2");
        assert!(matches!(result, Err(ResolveError::InstalledIdentifierMissing(n)) if n == "foo"));
    }

    #[test]
    fn store_failure_propagates() {
        let mut store = MockStore::new();
        store
            .expect_lookup()
            .times(1)
            .returning(|_| Err(StoreError("database locked".into())));
        let result = classify(&store, &matcher_never_called(), "foo>=1.2");
        assert!(matches!(result, Err(ResolveError::Store(_))));
        assert!(matches!(is_installed(&store_failing(), "foo"), Err(ResolveError::Store(_))));
    }

    fn store_failing() -> MockStore {
        let mut store = MockStore::new();
        store
            .expect_lookup()
            .returning(|_| Err(StoreError("io".into())));
        store
    }

    #[test]
    fn is_installed_ignores_state() {
        let record = PackageRecord::new(PkgState::HalfRemoved, "foo-1.0_1");
        assert!(is_installed(&store_with(Some(record)), "foo").unwrap());
        assert!(!is_installed(&store_with(None), "foo").unwrap());
    }
}
