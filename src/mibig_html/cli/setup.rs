use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mibig-html", bin_name = "mibig-html", version)]
#[command(about = "Static HTML pages for MIBiG gene cluster entries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one entry bundle into a page directory
    #[command(display_order = 1)]
    Render {
        /// Bundle JSON file
        bundle: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// Skip writing the .tar.gz archive
        #[arg(long)]
        no_archive: bool,
    },

    /// Render every bundle in a directory
    #[command(display_order = 2)]
    Batch {
        /// Directory of bundle JSON files
        input: PathBuf,

        /// Output directory; each entry gets a subdirectory named by accession
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// File to append failures to
        #[arg(long, value_name = "FILE")]
        log: Option<PathBuf>,
    },

    /// Get or set configuration
    #[command(display_order = 3)]
    Config {
        /// Configuration key (e.g. tta-threshold)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
