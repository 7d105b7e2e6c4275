//! # CLI Layer
//!
//! One client of the mibig-html library. This is the only place that:
//! - Parses shell arguments
//! - Installs the tracing subscriber
//! - Writes to stdout/stderr
//!
//! Handlers resolve the config file, build a `MibigApi<FileSink>` for the
//! output directory, dispatch, and print the returned messages. Exit codes
//! are decided in `main.rs`.

mod commands;
mod logging;
mod render;
mod setup;

pub use commands::run;
