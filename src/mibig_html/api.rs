//! # API Facade
//!
//! A thin layer over the commands. It owns what every command needs (the page
//! renderer, the render options, the reference caches and the output sink),
//! loads inputs from paths, and dispatches.
//!
//! The API does no rendering logic and no printing. It returns [`CmdResult`]s
//! for the caller to present.
//!
//! `MibigApi<S: OutputSink>` is generic over where output goes:
//! - Production: `MibigApi<FileSink>`
//! - Testing: `MibigApi<MemorySink>`

use crate::commands::{self, CmdResult};
use crate::config::RenderOptions;
use crate::error::Result;
use crate::references::{CacheKind, ReferenceCache};
use crate::render::{PageRenderer, ReferenceCaches};
use crate::sink::OutputSink;
use std::path::Path;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, MessageLevel};

pub struct MibigApi<S: OutputSink> {
    sink: S,
    renderer: PageRenderer,
    options: RenderOptions,
    caches: ReferenceCaches,
}

impl<S: OutputSink> MibigApi<S> {
    /// Builds the API, loading whichever reference caches the options name.
    pub fn new(sink: S, options: RenderOptions) -> Result<Self> {
        let caches = ReferenceCaches {
            pubmed: load_cache(options.pubmed_cache.as_deref(), CacheKind::Pubmed)?,
            doi: load_cache(options.doi_cache.as_deref(), CacheKind::Doi)?,
        };
        Ok(Self {
            sink,
            renderer: PageRenderer::new()?,
            options,
            caches,
        })
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Renders one bundle file into the root of the sink.
    pub fn render_file(&mut self, bundle_path: &Path) -> Result<CmdResult> {
        let bundle = commands::helpers::read_bundle(bundle_path)?;
        commands::render::run(
            &mut self.sink,
            &self.renderer,
            &bundle,
            &self.caches,
            &self.options,
            Path::new(""),
        )
    }

    /// Renders every `*.json` bundle in `input_dir`.
    pub fn render_dir(&mut self, input_dir: &Path, log: Option<&Path>) -> Result<CmdResult> {
        let paths = commands::helpers::bundle_files(input_dir)?;
        commands::batch::run(
            &mut self.sink,
            &self.renderer,
            &paths,
            &self.caches,
            &self.options,
            log,
        )
    }

    pub fn config(config_path: &Path, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(config_path, action)
    }
}

fn load_cache(path: Option<&Path>, kind: CacheKind) -> Result<ReferenceCache> {
    match path {
        Some(path) => ReferenceCache::load(path, kind),
        None => Ok(ReferenceCache::empty(kind)),
    }
}
