use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PickError, Result};
use crate::file_scanner;
use crate::matcher::FileMatcher;
use crate::output::OutputOption;
use crate::picked_file::PickedFile;

/// Session binding a source root to a destination root.
#[derive(Debug, Clone)]
pub struct Picker {
    src: PathBuf,
    dst: PathBuf,
}

/// One file and the directory it will be copied into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCopy {
    pub file: PickedFile,
    pub dest_dir: PathBuf,
}

impl PlannedCopy {
    pub fn dest_path(&self) -> PathBuf {
        match self.file.file_name() {
            Some(name) => self.dest_dir.join(name),
            None => self.dest_dir.clone(),
        }
    }
}

impl Picker {
    /// `src` must exist. `dst` is created lazily, per copied file.
    pub fn new(src: impl Into<PathBuf>, dst: impl Into<PathBuf>) -> Result<Self> {
        let src = src.into();
        if let Err(source) = fs::metadata(&src) {
            return Err(PickError::InvalidSource { path: src, source });
        }
        Ok(Picker {
            src,
            dst: dst.into(),
        })
    }

    pub fn src(&self) -> &Path {
        &self.src
    }

    pub fn dst(&self) -> &Path {
        &self.dst
    }

    pub fn list_files(&self, matcher: &FileMatcher) -> Result<Vec<PickedFile>> {
        file_scanner::list_files(&self.src, matcher)
    }

    /// Scans the source and works out where each match would land, without
    /// touching the destination.
    pub fn plan(&self, matcher: &FileMatcher, options: &[OutputOption]) -> Result<Vec<PlannedCopy>> {
        let files = self.list_files(matcher)?;
        let plan = files
            .into_iter()
            .map(|file| {
                let rel_dir = self.relative_dir(&file);
                let rel_dir = OutputOption::apply_all(options, &rel_dir);
                let dest_dir = if rel_dir.as_os_str().is_empty() {
                    self.dst.clone()
                } else {
                    self.dst.join(rel_dir)
                };
                debug!(src = %file.path.display(), dest_dir = %dest_dir.display(), "planned copy");
                PlannedCopy { file, dest_dir }
            })
            .collect();
        Ok(plan)
    }

    /// Copies every match into the destination, stopping at the first failure.
    /// Files copied before the failure stay on disk.
    ///
    /// Returns the number of files copied.
    pub fn pick(&self, matcher: &FileMatcher, options: &[OutputOption]) -> Result<usize> {
        let plan = self.plan(matcher, options)?;
        for planned in &plan {
            let dest_path = planned.file.copy_to(&planned.dest_dir)?;
            debug!(src = %planned.file.path.display(), dest = %dest_path.display(), "copied");
        }
        Ok(plan.len())
    }

    // Source-relative directory of `file`; empty for files directly under the
    // source root, or when the root itself is the file.
    fn relative_dir(&self, file: &PickedFile) -> PathBuf {
        file.dir()
            .strip_prefix(&self.src)
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }
}
