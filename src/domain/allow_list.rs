//! Authorized email allow-list.
//!
//! Loaded once at process start from a comma-delimited configuration string
//! and never mutated afterwards, so concurrent reads need no
//! synchronisation. Membership is the sole authorization predicate: no
//! roles, scopes, or expiry.

use std::collections::HashSet;

/// Immutable set of email addresses permitted past the gate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList(HashSet<String>);

impl AllowList {
    /// Parse a comma-delimited allow-list string.
    ///
    /// Entries are trimmed at load time and blank segments dropped;
    /// membership checks afterwards are exact and case-sensitive.
    pub fn from_delimited(raw: &str) -> Self {
        let entries = raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_owned)
            .collect();
        Self(entries)
    }

    /// Exact, case-sensitive membership test.
    pub fn is_member(&self, email: &str) -> bool {
        self.0.contains(email)
    }

    /// Number of configured entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no entries are configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for AllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ada@example.com,grace@example.com", 2)]
    #[case(" ada@example.com , grace@example.com ", 2)]
    #[case("ada@example.com,,", 1)]
    #[case("", 0)]
    #[case(" , ", 0)]
    fn parses_delimited_entries(#[case] raw: &str, #[case] expected_len: usize) {
        let allow_list = AllowList::from_delimited(raw);
        assert_eq!(allow_list.len(), expected_len);
    }

    #[test]
    fn membership_is_exact_and_case_sensitive() {
        let allow_list = AllowList::from_delimited("ada@example.com");
        assert!(allow_list.is_member("ada@example.com"));
        assert!(!allow_list.is_member("Ada@example.com"));
        assert!(!allow_list.is_member("ada@example.co"));
        assert!(!allow_list.is_member(""));
    }

    #[test]
    fn empty_list_rejects_everything() {
        let allow_list = AllowList::default();
        assert!(allow_list.is_empty());
        assert!(!allow_list.is_member("ada@example.com"));
    }
}
