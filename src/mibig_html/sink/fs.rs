use super::OutputSink;
use crate::error::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes below `root`. Absolute paths are used as given.
pub struct FileSink {
    root: PathBuf,
}

impl FileSink {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> Result<PathBuf> {
        let full = self.root.join(path);
        if let Some(dir) = full.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        Ok(full)
    }
}

impl OutputSink for FileSink {
    fn write(&mut self, path: &Path, contents: &[u8]) -> Result<()> {
        let full = self.resolve(path)?;
        fs::write(full, contents)?;
        Ok(())
    }

    fn append_line(&mut self, path: &Path, line: &str) -> Result<()> {
        let full = self.resolve(path)?;
        let mut file = OpenOptions::new().create(true).append(true).open(full)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_creates_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(temp_dir.path());
        sink.write(Path::new("BGC0000001/index.html"), b"<html></html>")
            .unwrap();

        let written = fs::read_to_string(temp_dir.path().join("BGC0000001/index.html")).unwrap();
        assert_eq!(written, "<html></html>");
    }

    #[test]
    fn append_line_accumulates() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(temp_dir.path());
        sink.append_line(Path::new("errors.log"), "first").unwrap();
        sink.append_line(Path::new("errors.log"), "second").unwrap();

        let log = fs::read_to_string(temp_dir.path().join("errors.log")).unwrap();
        assert_eq!(log, "first\nsecond\n");
    }

    #[test]
    fn absolute_paths_bypass_root() {
        let root = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        let target = elsewhere.path().join("run.log");

        let mut sink = FileSink::new(root.path());
        sink.append_line(&target, "entry").unwrap();
        assert!(target.exists());
    }
}
