//! Splitting of dependency patterns such as `foo>=1.2`.

/// Characters that start the constraint part of a pattern.
pub const PATTERN_OPERATORS: [char; 3] = ['>', '<', '='];

fn operator_index(pattern: &str) -> Option<usize> {
    pattern.find(PATTERN_OPERATORS)
}

/// Package name of a pattern: everything before the first `>`, `<` or `=`.
///
/// Returns `None` when the pattern has no operator, and when the operator is
/// the first character (there is no name to extract).
///
/// ```
/// use xpkg_schema::pattern::pattern_name;
///
/// assert_eq!(pattern_name("foo>=1.2").as_deref(), Some("foo"));
/// assert_eq!(pattern_name("foo"), None);
/// assert_eq!(pattern_name(">=1.2"), None);
/// ```
pub fn pattern_name(pattern: &str) -> Option<String> {
    match operator_index(pattern)? {
        0 => None,
        idx => Some(pattern[..idx].to_string()),
    }
}

/// Constraint of a pattern: from the first operator to the end, operator included.
pub fn pattern_constraint(pattern: &str) -> Option<String> {
    operator_index(pattern).map(|idx| pattern[idx..].to_string())
}

/// Borrowed view over a dependency pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PkgPattern<'a>(&'a str);

impl<'a> PkgPattern<'a> {
    /// Wrap a pattern string. No validation is performed.
    pub fn new(pattern: &'a str) -> Self {
        Self(pattern)
    }

    /// The full pattern.
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// See [`pattern_name`].
    pub fn name(&self) -> Option<String> {
        pattern_name(self.0)
    }

    /// See [`pattern_constraint`].
    pub fn constraint(&self) -> Option<String> {
        pattern_constraint(self.0)
    }

    /// Whether the pattern carries a version constraint at all.
    pub fn has_constraint(&self) -> bool {
        operator_index(self.0).is_some()
    }
}

impl std::fmt::Display for PkgPattern<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_name_and_constraint() {
        let p = PkgPattern::new("foo>=1.2");
        assert_eq!(p.name().as_deref(), Some("foo"));
        assert_eq!(p.constraint().as_deref(), Some(">=1.2"));
        assert!(p.has_constraint());
    }

    #[test]
    fn first_operator_wins() {
        assert_eq!(pattern_name("foo<2.0>1.0").as_deref(), Some("foo"));
        assert_eq!(pattern_constraint("foo<2.0>1.0").as_deref(), Some("<2.0>1.0"));
        assert_eq!(pattern_constraint("bar=1.0").as_deref(), Some("=1.0"));
    }

    #[test]
    fn bare_name_has_no_parts() {
        let p = PkgPattern::new("foo");
        assert_eq!(p.name(), None);
        assert_eq!(p.constraint(), None);
        assert!(!p.has_constraint());
    }

    #[test]
    fn empty_and_leading_operator_guarded() {
        assert_eq!(pattern_name(""), None);
        assert_eq!(pattern_name("=1.0"), None);
        assert_eq!(pattern_constraint("=1.0").as_deref(), Some("=1.0"));
    }

    #[test]
    fn dashes_stay_in_name() {
        assert_eq!(pattern_name("foo-bar>0").as_deref(), Some("foo-bar"));
    }
}
