//! # Command Layer
//!
//! The operations behind the CLI, as plain functions over Rust types. Each
//! command lives in its own submodule.
//!
//! Commands:
//! - take their inputs as arguments and write output only through an
//!   [`OutputSink`](crate::sink::OutputSink)
//! - return a [`CmdResult`] with structured messages instead of printing
//! - never decide exit codes; errors are returned and the caller decides
//!
//! Command tests use [`MemorySink`](crate::sink::memory::MemorySink), so they
//! never need a scratch directory for output.
//!
//! ## Command Modules
//!
//! - [`render`]: render one bundle into a page directory
//! - [`batch`]: render every bundle in a directory, logging failures
//! - [`config`]: show and change render options
//! - [`helpers`]: bundle loading and archive writing

use crate::config::RenderOptions;
use std::path::PathBuf;

pub mod batch;
pub mod config;
pub mod helpers;
pub mod render;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Accessions rendered successfully.
    pub rendered: Vec<String>,
    /// Files written, relative to the sink.
    pub written: Vec<PathBuf>,
    pub config: Option<RenderOptions>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_config(mut self, config: RenderOptions) -> Self {
        self.config = Some(config);
        self
    }

    /// Folds another result into this one, keeping order.
    pub fn merge(&mut self, other: CmdResult) {
        self.rendered.extend(other.rendered);
        self.written.extend(other.written);
        self.messages.extend(other.messages);
        if other.config.is_some() {
            self.config = other.config;
        }
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
