use crate::error::Result;
use crate::model::Bundle;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Reads a JSON bundle from disk.
pub fn read_bundle(path: &Path) -> Result<Bundle> {
    let content = fs::read_to_string(path)?;
    let bundle: Bundle = serde_json::from_str(&content)?;
    Ok(bundle)
}

/// `*.json` files directly inside `dir`, sorted by name.
pub fn bundle_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Writes a gzipped tarball holding `files` under the `folder/` directory.
pub fn write_archive<W: Write>(writer: W, folder: &str, files: &[(&str, &[u8])]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for (name, contents) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        tar.append_data(&mut header, format!("{}/{}", folder, name), *contents)?;
    }

    tar.into_inner()?.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;

    #[test]
    fn archive_holds_files_under_folder() {
        let mut buf = Vec::new();
        write_archive(
            &mut buf,
            "BGC0000001",
            &[
                ("index.html", b"<html></html>".as_slice()),
                ("annotations.json", b"{}".as_slice()),
            ],
        )
        .unwrap();

        // gzip magic
        assert_eq!(&buf[..2], &[0x1f, 0x8b]);

        let mut archive = tar::Archive::new(GzDecoder::new(buf.as_slice()));
        let names: Vec<String> = archive
            .entries()
            .unwrap()
            .map(|e| e.unwrap().path().unwrap().display().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["BGC0000001/index.html", "BGC0000001/annotations.json"]
        );
    }

    #[test]
    fn bundle_files_only_lists_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("b.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("a.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(temp_dir.path().join("sub.json")).unwrap();

        let files = bundle_files(temp_dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn read_bundle_reports_bad_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(read_bundle(&path).is_err());
    }
}
