use crate::error::{MibigError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_TTA_THRESHOLD: f64 = 0.65;
const DEFAULT_BASE_URL: &str = "https://mibig.secondarymetabolites.org/";
const DEFAULT_STYLESHEET: &str = "css/mibig.css";

/// Options that shape rendered pages, stored as `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderOptions {
    /// Whether TTA codon detection ran for the record.
    #[serde(default)]
    pub tta_enabled: bool,

    /// Minimal run mode; optional analyses are off unless explicitly enabled.
    #[serde(default)]
    pub minimal: bool,

    /// GC content at or above which TTA codons are marked.
    #[serde(default = "default_tta_threshold")]
    pub tta_threshold: f64,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Stylesheet path, relative to the written page.
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,

    #[serde(default)]
    pub pubmed_cache: Option<PathBuf>,

    #[serde(default)]
    pub doi_cache: Option<PathBuf>,

    /// Whether to bundle each output directory into a `.tar.gz`.
    #[serde(default = "default_archive")]
    pub archive: bool,
}

fn default_tta_threshold() -> f64 {
    DEFAULT_TTA_THRESHOLD
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_stylesheet() -> String {
    DEFAULT_STYLESHEET.to_string()
}

fn default_archive() -> bool {
    true
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tta_enabled: false,
            minimal: false,
            tta_threshold: DEFAULT_TTA_THRESHOLD,
            base_url: default_base_url(),
            stylesheet: default_stylesheet(),
            pubmed_cache: None,
            doi_cache: None,
            archive: true,
        }
    }
}

/// Keys accepted by `config <key> [value]`.
pub const CONFIG_KEYS: &[&str] = &[
    "tta-enabled",
    "minimal",
    "tta-threshold",
    "base-url",
    "stylesheet",
    "pubmed-cache",
    "doi-cache",
    "archive",
];

impl RenderOptions {
    /// Load options from a file, or return defaults if it does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let options: RenderOptions = serde_json::from_str(&content)?;
        Ok(options)
    }

    /// Save options to a file, creating its directory if needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// TTA codons are only marked when the analysis could have run and the
    /// record is GC-rich enough for them to matter.
    pub fn shows_tta(&self, gc_content: f64) -> bool {
        (self.tta_enabled || !self.minimal) && gc_content >= self.tta_threshold
    }

    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "tta-enabled" => self.tta_enabled.to_string(),
            "minimal" => self.minimal.to_string(),
            "tta-threshold" => self.tta_threshold.to_string(),
            "base-url" => self.base_url.clone(),
            "stylesheet" => self.stylesheet.clone(),
            "pubmed-cache" => display_path(&self.pubmed_cache),
            "doi-cache" => display_path(&self.doi_cache),
            "archive" => self.archive.to_string(),
            other => return Err(MibigError::Config(format!("Unknown config key: {}", other))),
        };
        Ok(value)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "tta-enabled" => self.tta_enabled = parse_bool(key, value)?,
            "minimal" => self.minimal = parse_bool(key, value)?,
            "tta-threshold" => {
                let threshold: f64 = value.parse().map_err(|_| {
                    MibigError::Config(format!("tta-threshold must be a number, got {}", value))
                })?;
                if !(0.0..=1.0).contains(&threshold) {
                    return Err(MibigError::Config(format!(
                        "tta-threshold must be between 0 and 1, got {}",
                        value
                    )));
                }
                self.tta_threshold = threshold;
            }
            "base-url" => {
                self.base_url = if value.ends_with('/') {
                    value.to_string()
                } else {
                    format!("{}/", value)
                }
            }
            "stylesheet" => self.stylesheet = value.to_string(),
            "pubmed-cache" => self.pubmed_cache = optional_path(value),
            "doi-cache" => self.doi_cache = optional_path(value),
            "archive" => self.archive = parse_bool(key, value)?,
            other => return Err(MibigError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(MibigError::Config(format!(
            "{} expects true or false, got {}",
            key, value
        ))),
    }
}

fn optional_path(value: &str) -> Option<PathBuf> {
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}
