use super::OutputSink;
use crate::error::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// In-memory output for tests. Nothing is persisted.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&[u8]> {
        self.files.get(path.as_ref()).map(Vec::as_slice)
    }

    pub fn get_str(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.get(path).and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    pub fn paths(&self) -> Vec<&Path> {
        self.files.keys().map(PathBuf::as_path).collect()
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, path: &Path, contents: &[u8]) -> Result<()> {
        self.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn append_line(&mut self, path: &Path, line: &str) -> Result<()> {
        let file = self.files.entry(path.to_path_buf()).or_default();
        file.extend_from_slice(line.as_bytes());
        file.push(b'\n');
        Ok(())
    }
}
