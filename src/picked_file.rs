use std::ffi::OsStr;
use std::fs::{self, File, Permissions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{PickError, Result};

/// A file found by the scanner. `permissions` is what the directory entry
/// reported at scan time; it is not reapplied when copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub path: PathBuf,
    pub permissions: Permissions,
}

impl PickedFile {
    pub fn new(path: PathBuf, permissions: Permissions) -> Self {
        PickedFile { path, permissions }
    }

    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    /// Directory holding the file, as walked (not normalized).
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    pub fn read(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(|e| PickError::io(&self.path, e))
    }

    /// Copies the file into `dest_dir`, creating the directory and any missing
    /// ancestors. An existing file of the same name is truncated.
    ///
    /// Returns the destination path. The destination gets the process's default
    /// mode, not the source's.
    pub fn copy_to(&self, dest_dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dest_dir).map_err(|e| PickError::io(dest_dir, e))?;

        let meta = fs::metadata(&self.path).map_err(|e| PickError::io(&self.path, e))?;
        if !meta.is_file() {
            return Err(PickError::NotRegularFile(self.path.clone()));
        }

        let file_name = self
            .file_name()
            .ok_or_else(|| PickError::NotRegularFile(self.path.clone()))?;
        let dest_path = dest_dir.join(file_name);

        let mut source = File::open(&self.path).map_err(|e| PickError::io(&self.path, e))?;
        let mut destination =
            File::create(&dest_path).map_err(|e| PickError::io(&dest_path, e))?;
        copy_contents(&self.path, &mut source, &dest_path, &mut destination)?;

        Ok(dest_path)
    }
}

// Streams `reader` into `writer`. Read failures carry the source path, write
// failures the destination path.
fn copy_contents<R: Read, W: Write>(
    src_path: &Path,
    reader: &mut R,
    dest_path: &Path,
    writer: &mut W,
) -> Result<u64> {
    let mut buf = [0u8; 8 * 1024];
    let mut written: u64 = 0;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(PickError::io(src_path, e)),
        };
        writer
            .write_all(&buf[..n])
            .map_err(|e| PickError::io(dest_path, e))?;
        written += n as u64;
    }
    writer.flush().map_err(|e| PickError::io(dest_path, e))?;
    Ok(written)
}
