use super::helpers::write_archive;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::RenderOptions;
use crate::error::Result;
use crate::model::Bundle;
use crate::render::{PageRenderer, ReferenceCaches, ANNOTATIONS_FILE};
use crate::sink::OutputSink;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const INDEX_FILE: &str = "index.html";

/// Renders one bundle into `dir` (relative to the sink).
///
/// Writes the page, the entry data and, if enabled, an archive of both.
pub fn run<S: OutputSink>(
    sink: &mut S,
    renderer: &PageRenderer,
    bundle: &Bundle,
    caches: &ReferenceCaches,
    options: &RenderOptions,
    dir: &Path,
) -> Result<CmdResult> {
    let accession = bundle.entry.cluster.mibig_accession.as_str();
    info!("Rendering {}", accession);

    let page = renderer.render_entry(bundle, caches, options)?;
    let annotations = serde_json::to_string_pretty(&bundle.entry)?;

    let mut written: Vec<PathBuf> = Vec::new();
    let index_path = dir.join(INDEX_FILE);
    sink.write(&index_path, page.as_bytes())?;
    written.push(index_path);

    let annotations_path = dir.join(ANNOTATIONS_FILE);
    sink.write(&annotations_path, annotations.as_bytes())?;
    written.push(annotations_path);

    if options.archive {
        let mut archive = Vec::new();
        write_archive(
            &mut archive,
            accession,
            &[
                (INDEX_FILE, page.as_bytes()),
                (ANNOTATIONS_FILE, annotations.as_bytes()),
            ],
        )?;
        let archive_path = dir.join(format!("{}.tar.gz", accession));
        sink.write(&archive_path, &archive)?;
        written.push(archive_path);
    }
    debug!("Wrote {} files for {}", written.len(), accession);

    let mut result = CmdResult {
        rendered: vec![accession.to_string()],
        written,
        ..Default::default()
    };
    let note = if bundle.entry.cluster.retired {
        " (retired)"
    } else {
        ""
    };
    result.add_message(CmdMessage::success(format!(
        "Rendered {}{}",
        accession, note
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::memory::MemorySink;
    use crate::test_utils as fixtures;

    fn render(bundle: &Bundle, options: &RenderOptions) -> (MemorySink, Result<CmdResult>) {
        let mut sink = MemorySink::new();
        let renderer = PageRenderer::new().unwrap();
        let result = run(
            &mut sink,
            &renderer,
            bundle,
            &ReferenceCaches::empty(),
            options,
            Path::new("out"),
        );
        (sink, result)
    }

    #[test]
    fn writes_page_annotations_and_archive() {
        let (sink, result) = render(&fixtures::bundle(), &RenderOptions::default());
        let result = result.unwrap();

        assert_eq!(result.rendered, vec!["BGC0000001"]);
        assert_eq!(result.written.len(), 3);
        assert!(sink.get_str("out/index.html").unwrap().contains("<!doctype html>"));
        assert!(sink.get("out/BGC0000001.tar.gz").is_some());

        let annotations: serde_json::Value =
            serde_json::from_str(sink.get_str("out/annotations.json").unwrap()).unwrap();
        assert_eq!(annotations["cluster"]["mibig_accession"], "BGC0000001");
    }

    #[test]
    fn archive_can_be_disabled() {
        let options = RenderOptions {
            archive: false,
            ..Default::default()
        };
        let (sink, result) = render(&fixtures::bundle(), &options);
        assert_eq!(result.unwrap().written.len(), 2);
        assert!(sink.get("out/BGC0000001.tar.gz").is_none());
    }

    #[test]
    fn invalid_entry_writes_nothing() {
        let mut bundle = fixtures::bundle();
        bundle.entry.cluster.compounds.clear();
        let (sink, result) = render(&bundle, &RenderOptions::default());
        assert!(result.is_err());
        assert!(sink.paths().is_empty());
    }
}
