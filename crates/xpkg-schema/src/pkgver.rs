//! Splitting of `name-version[_revision][:epoch]` package identifiers.
//!
//! Every accessor is an independent scan over the original string. A missing
//! delimiter yields `None`; nothing here fails or panics.
//!
//! Note that [`pkg_version`] returns everything after the last `-`, which
//! still includes a trailing `_revision`. [`pkg_revision`] is extracted
//! separately from the whole identifier, so for `foo-1.2.3_1` the version is
//! `1.2.3_1` and the revision is `1`. Callers that need the bare version must
//! strip at the last `_` themselves.

/// Package name: everything before the last `-`.
///
/// ```
/// use xpkg_schema::pkgver::pkg_name;
///
/// assert_eq!(pkg_name("foo-1.2.3_1").as_deref(), Some("foo"));
/// assert_eq!(pkg_name("foo-bar-2.0").as_deref(), Some("foo-bar"));
/// assert_eq!(pkg_name("foo"), None);
/// ```
pub fn pkg_name(pkgver: &str) -> Option<String> {
    pkgver.rfind('-').map(|idx| pkgver[..idx].to_string())
}

/// Version string: everything after the last `-`, revision included.
pub fn pkg_version(pkgver: &str) -> Option<String> {
    after_last(pkgver, '-')
}

/// Revision: everything after the last `_` anywhere in the identifier.
pub fn pkg_revision(pkgver: &str) -> Option<String> {
    after_last(pkgver, '_')
}

/// Epoch: everything after the last `:` anywhere in the identifier.
pub fn pkg_epoch(pkgver: &str) -> Option<String> {
    after_last(pkgver, ':')
}

fn after_last(s: &str, delim: char) -> Option<String> {
    s.rfind(delim)
        .map(|idx| s[idx + delim.len_utf8()..].to_string())
}

/// Borrowed view over a package identifier such as `foo-1.2.3_1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PkgVer<'a>(&'a str);

impl<'a> PkgVer<'a> {
    /// Wrap an identifier. No validation is performed.
    pub fn new(pkgver: &'a str) -> Self {
        Self(pkgver)
    }

    /// The full identifier.
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// See [`pkg_name`].
    pub fn name(&self) -> Option<String> {
        pkg_name(self.0)
    }

    /// See [`pkg_version`].
    pub fn version(&self) -> Option<String> {
        pkg_version(self.0)
    }

    /// See [`pkg_revision`].
    pub fn revision(&self) -> Option<String> {
        pkg_revision(self.0)
    }

    /// See [`pkg_epoch`].
    pub fn epoch(&self) -> Option<String> {
        pkg_epoch(self.0)
    }
}

impl std::fmt::Display for PkgVer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_full_identifier() {
        let id = PkgVer::new("foo-1.2.3_1");
        assert_eq!(id.name().as_deref(), Some("foo"));
        assert_eq!(id.version().as_deref(), Some("1.2.3_1"));
        assert_eq!(id.revision().as_deref(), Some("1"));
        assert_eq!(id.epoch(), None);
    }

    #[test]
    fn name_uses_last_dash() {
        assert_eq!(pkg_name("libfoo-devel-0.5").as_deref(), Some("libfoo-devel"));
        assert_eq!(pkg_version("libfoo-devel-0.5").as_deref(), Some("0.5"));
    }

    #[test]
    fn missing_delimiters_are_absent() {
        assert_eq!(pkg_name("foo"), None);
        assert_eq!(pkg_version("foo"), None);
        assert_eq!(pkg_revision("foo-1.0"), None);
        assert_eq!(pkg_epoch("foo-1.0_2"), None);
    }

    #[test]
    fn epoch_is_after_last_colon() {
        assert_eq!(pkg_epoch("foo-1.0_2:3").as_deref(), Some("3"));
        // revision scan is independent and sees the epoch suffix too
        assert_eq!(pkg_revision("foo-1.0_2:3").as_deref(), Some("2:3"));
    }

    #[test]
    fn trailing_delimiter_gives_empty_component() {
        assert_eq!(pkg_version("foo-").as_deref(), Some(""));
        assert_eq!(pkg_name("-1.0").as_deref(), Some(""));
    }

    #[test]
    fn input_is_untouched() {
        let raw = String::from("bar-2.0_3");
        let _ = pkg_name(&raw);
        let _ = pkg_revision(&raw);
        assert_eq!(raw, "bar-2.0_3");
    }
}
