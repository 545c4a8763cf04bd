use regex::Regex;
use std::ffi::OsStr;

use crate::error::Result;

/// Predicate over a base filename deciding whether a walked entry is picked.
#[derive(Debug, Clone)]
pub enum FileMatcher {
    /// Byte-for-byte equality with the given filename.
    Exact(String),
    /// Unanchored search: any match inside the filename counts.
    Regex(Regex),
}

impl FileMatcher {
    pub fn exact(filename: impl Into<String>) -> Self {
        FileMatcher::Exact(filename.into())
    }

    /// Compiles `pattern`. A bad pattern fails here, never at match time.
    pub fn regex(pattern: &str) -> Result<Self> {
        Ok(FileMatcher::Regex(Regex::new(pattern)?))
    }

    /// Tests a base filename (last path component only).
    pub fn is_match(&self, file_name: &OsStr) -> bool {
        match self {
            FileMatcher::Exact(name) => file_name == OsStr::new(name),
            FileMatcher::Regex(re) => re.is_match(&file_name.to_string_lossy()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PickError;

    fn matches(matcher: &FileMatcher, name: &str) -> bool {
        matcher.is_match(OsStr::new(name))
    }

    #[test]
    fn exact_matches_only_identical_names() {
        let matcher = FileMatcher::exact("target.txt");
        assert!(matches(&matcher, "target.txt"));
        assert!(!matches(&matcher, "bar"));
        assert!(!matches(&matcher, "Target.txt"));
        assert!(!matches(&matcher, "target.txt.bak"));
        assert!(!matches(&matcher, ""));
    }

    #[test]
    fn exact_with_empty_name_matches_only_empty() {
        let matcher = FileMatcher::exact("");
        assert!(matches(&matcher, ""));
        assert!(!matches(&matcher, "a"));
    }

    #[test]
    fn regex_anchored_pattern() {
        let matcher = FileMatcher::regex(r"\Atarget\.txt\z").unwrap();
        assert!(matches(&matcher, "target.txt"));
        assert!(!matches(&matcher, "my_target.txt"));
    }

    #[test]
    fn regex_searches_anywhere_in_name() {
        let matcher = FileMatcher::regex(r"target\.txt").unwrap();
        assert!(matches(&matcher, "target.txt"));
        assert!(matches(&matcher, "old-target.txt.bak"));
        assert!(!matches(&matcher, "bar"));

        let matcher = FileMatcher::regex(r"\.rs$").unwrap();
        assert!(matches(&matcher, "lib.rs"));
        assert!(!matches(&matcher, "lib.rs.orig"));
    }

    #[test]
    fn broken_regex_is_rejected_at_construction() {
        let err = FileMatcher::regex("(.*?").unwrap_err();
        assert!(matches!(err, PickError::Pattern(_)));
    }
}
