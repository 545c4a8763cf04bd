use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Marker that replaces each path separator when flattening.
pub const FLAT_DIR_SEPARATOR: &str = "__";

/// Transform applied to a file's source-relative directory before it is
/// joined under the destination root. No option means mirror mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputOption {
    /// Collapse `a/b/c` into the single directory name `a__b__c`.
    FlatDir,
}

impl OutputOption {
    pub fn apply(&self, rel_dir: &Path) -> PathBuf {
        match self {
            OutputOption::FlatDir => flatten(rel_dir),
        }
    }

    /// Applies `options` left to right, each one fed the previous output.
    pub fn apply_all(options: &[OutputOption], rel_dir: &Path) -> PathBuf {
        options
            .iter()
            .fold(rel_dir.to_path_buf(), |dir, option| option.apply(&dir))
    }
}

fn flatten(rel_dir: &Path) -> PathBuf {
    let mut flat = OsString::new();
    for (idx, component) in rel_dir.components().enumerate() {
        if idx > 0 {
            flat.push(FLAT_DIR_SEPARATOR);
        }
        flat.push(component.as_os_str());
    }
    PathBuf::from(flat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_dir_joins_components_with_marker() {
        let flat = OutputOption::FlatDir.apply(Path::new("a/b"));
        assert_eq!(flat, PathBuf::from("a__b"));

        let flat = OutputOption::FlatDir.apply(Path::new("foo/bar/baz"));
        assert_eq!(flat, PathBuf::from("foo__bar__baz"));
    }

    #[test]
    fn flat_dir_leaves_single_level_untouched() {
        assert_eq!(OutputOption::FlatDir.apply(Path::new("foo")), PathBuf::from("foo"));
        assert_eq!(OutputOption::FlatDir.apply(Path::new("")), PathBuf::new());
    }

    #[test]
    fn no_options_is_identity() {
        let rel = Path::new("foo/bar");
        assert_eq!(OutputOption::apply_all(&[], rel), rel.to_path_buf());
    }

    #[test]
    fn options_compose_in_order() {
        let rel = Path::new("a/b/c");
        let once = OutputOption::apply_all(&[OutputOption::FlatDir], rel);
        let twice =
            OutputOption::apply_all(&[OutputOption::FlatDir, OutputOption::FlatDir], rel);
        assert_eq!(once, PathBuf::from("a__b__c"));
        assert_eq!(twice, once);
    }
}
