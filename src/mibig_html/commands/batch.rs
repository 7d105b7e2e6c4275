use super::helpers::read_bundle;
use crate::commands::{render, CmdMessage, CmdResult};
use crate::config::RenderOptions;
use crate::error::Result;
use crate::render::{PageRenderer, ReferenceCaches};
use crate::sink::OutputSink;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Renders each bundle into a directory named after its accession.
///
/// Every outcome is appended to the log when one is given. A failing bundle
/// is reported and skipped; the batch itself only fails if the log cannot be
/// written.
pub fn run<S: OutputSink>(
    sink: &mut S,
    renderer: &PageRenderer,
    bundle_paths: &[PathBuf],
    caches: &ReferenceCaches,
    options: &RenderOptions,
    log: Option<&Path>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut failures = 0;

    for path in bundle_paths {
        let outcome = match read_bundle(path) {
            Ok(bundle) => {
                let dir = PathBuf::from(&bundle.entry.cluster.mibig_accession);
                render::run(sink, renderer, &bundle, caches, options, &dir)
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok(rendered) => {
                if let Some(log) = log {
                    for accession in &rendered.rendered {
                        let message = format!("Generated page for {}", accession);
                        sink.append_line(log, &log_line(&message))?;
                    }
                }
                result.merge(rendered)
            }
            Err(e) => {
                failures += 1;
                let message = format!("{}: {}", path.display(), e);
                warn!("{}", message);
                if let Some(log) = log {
                    sink.append_line(log, &log_line(&message))?;
                }
                result.add_message(CmdMessage::error(message));
            }
        }
    }

    info!(
        "Batch finished: {} rendered, {} failed",
        result.rendered.len(),
        failures
    );
    let summary = format!(
        "{} of {} entries rendered",
        result.rendered.len(),
        bundle_paths.len()
    );
    if failures == 0 {
        result.add_message(CmdMessage::success(summary));
    } else {
        result.add_message(CmdMessage::warning(summary));
    }
    Ok(result)
}

fn log_line(message: &str) -> String {
    format!("{} {}", Local::now().format("[%Y-%m-%d %H:%M:%S]"), message)
}
