//! # Output Layer
//!
//! Commands never touch the filesystem directly when writing results. They go
//! through the [`OutputSink`] trait, so the same command code writes real files
//! in production and into memory under test.
//!
//! ## Implementations
//!
//! - [`fs::FileSink`]: writes below a root directory, creating directories as
//!   needed.
//! - [`memory::MemorySink`]: keeps every file in a map, for tests.
//!
//! ## Layout
//!
//! For a rendered entry:
//! ```text
//! <out>/
//! ├── index.html          # the page
//! ├── annotations.json    # the entry data the page was built from
//! └── BGC0000001.tar.gz   # both files above, bundled for download
//! ```
//!
//! Batch runs use one such directory per accession.

use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

pub trait OutputSink {
    /// Writes a file, replacing any previous content.
    fn write(&mut self, path: &Path, contents: &[u8]) -> Result<()>;

    /// Appends one line to a file, creating it if needed.
    fn append_line(&mut self, path: &Path, line: &str) -> Result<()>;
}
