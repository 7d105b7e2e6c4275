use super::logging::init_logger;
use super::render::{print_config, print_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use mibig_html::api::{ConfigAction, MibigApi};
use mibig_html::config::{RenderOptions, CONFIG_FILENAME};
use mibig_html::error::{MibigError, Result};
use mibig_html::sink::fs::FileSink;
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    debug!("Using config {}", config_path.display());

    match cli.command {
        Commands::Render {
            bundle,
            output,
            no_archive,
        } => handle_render(&config_path, &bundle, &output, no_archive),
        Commands::Batch { input, output, log } => {
            handle_batch(&config_path, &input, &output, log)
        }
        Commands::Config { key, value } => handle_config(&config_path, key, value),
    }
}

fn default_config_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("org", "secondarymetabolites", "mibig-html")
        .ok_or_else(|| MibigError::Config("Could not determine config dir".into()))?;
    Ok(dirs.config_dir().join(CONFIG_FILENAME))
}

fn handle_render(config_path: &Path, bundle: &Path, output: &Path, no_archive: bool) -> Result<()> {
    let mut options = RenderOptions::load(config_path)?;
    if no_archive {
        options.archive = false;
    }

    let mut api = MibigApi::new(FileSink::new(output), options)?;
    let result = api.render_file(bundle)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_batch(
    config_path: &Path,
    input: &Path,
    output: &Path,
    log: Option<PathBuf>,
) -> Result<()> {
    let options = RenderOptions::load(config_path)?;
    // the sink resolves relative paths against the output directory
    let log = match log {
        Some(path) if path.is_relative() => Some(std::env::current_dir()?.join(path)),
        other => other,
    };

    let mut api = MibigApi::new(FileSink::new(output), options)?;
    let result = api.render_dir(input, log.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(config_path: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = MibigApi::<FileSink>::config(config_path, action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    if result.has_errors() {
        return Err(MibigError::Config("invalid config request".into()));
    }
    Ok(())
}
