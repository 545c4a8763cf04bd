//! Pick files out of a directory tree by name and copy them elsewhere.
//!
//! ```no_run
//! use fpick::{FileMatcher, OutputOption, Picker};
//!
//! let picker = Picker::new("testdata", ".out")?;
//! picker.pick(&FileMatcher::exact("target.txt"), &[OutputOption::FlatDir])?;
//! # Ok::<(), fpick::PickError>(())
//! ```

pub mod error;
pub mod file_scanner;
pub mod matcher;
pub mod output;
pub mod picked_file;
pub mod picker;

pub use error::{PickError, Result};
pub use file_scanner::list_files;
pub use matcher::FileMatcher;
pub use output::{FLAT_DIR_SEPARATOR, OutputOption};
pub use picked_file::PickedFile;
pub use picker::{Picker, PlannedCopy};
