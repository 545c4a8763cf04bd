use std::path::Path;
use walkdir::WalkDir;

use crate::error::Result;
use crate::matcher::FileMatcher;
use crate::picked_file::PickedFile;

/// Walks `root` depth-first and collects every non-directory entry whose base
/// name satisfies `matcher`.
///
/// Entries within a directory are visited in file-name order. The first
/// traversal error aborts the scan; no partial list is returned.
pub fn list_files(root: &Path, matcher: &FileMatcher) -> Result<Vec<PickedFile>> {
    let mut picked: Vec<PickedFile> = Vec::new();

    for result in WalkDir::new(root).sort_by_file_name() {
        let dirent = result?;

        // Directories are only descended into, never picked.
        if dirent.file_type().is_dir() {
            continue;
        }
        if !matcher.is_match(dirent.file_name()) {
            continue;
        }

        let permissions = dirent.metadata()?.permissions();
        picked.push(PickedFile::new(dirent.into_path(), permissions));
    }

    Ok(picked)
}
