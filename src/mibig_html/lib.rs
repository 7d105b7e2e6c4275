//! # mibig-html Architecture
//!
//! mibig-html turns MIBiG gene cluster entries into static HTML region pages.
//! The core is a library: it takes parsed entries and writes pages through an
//! output abstraction. The `mibig-html` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, sets up logging, prints messages       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Loads bundles and reference caches from paths            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - render, batch and config                                 │
//! │  - Returns `CmdResult` with structured messages             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Render Layer (render/)                                     │
//! │  - View models built from the entry and record              │
//! │  - Templates, shared macros, tab composition                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Output Layer (sink/)                                       │
//! │  - Abstract OutputSink trait                                │
//! │  - FileSink (production), MemorySink (testing)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rendering Model
//!
//! Every page is a pure function of its inputs: the bundle (entry, record,
//! region, taxonomy), the reference caches and the [`config::RenderOptions`].
//! Rendering the same inputs twice produces identical bytes, including the
//! numbering of help tooltips, which restarts for every page.
//!
//! Templates only lay out view models. Decisions such as which legend entries
//! apply, how NRPS modules span gene rows or which tabs exist are made in Rust
//! and tested there.
//!
//! ## Testing Strategy
//!
//! 1. **View models** (`render/*.rs`): unit tests of the data shaping.
//! 2. **Templates** (`render/mod.rs`): rendered fragments checked for
//!    structure, escaping and determinism.
//! 3. **Commands and API**: run against `MemorySink`.
//! 4. **CLI** (`tests/`): the binary run end to end on a scratch directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: render, batch and config
//! - [`render`]: View models, templates and the page composer
//! - [`sink`]: Output abstraction and implementations
//! - [`model`]: Entry, record and region data
//! - [`references`]: Literature links and cached metadata
//! - [`config`]: Render options
//! - [`error`]: Error types
//! - `cli`: Argument parsing, logging setup and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod references;
pub mod render;
pub mod sink;

#[cfg(test)]
pub mod test_utils;
