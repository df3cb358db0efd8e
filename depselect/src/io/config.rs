//! Selector configuration stored in `.depselect.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::io::prompt::ScanFailurePolicy;
use crate::io::style::EmphasisStyle;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".depselect.toml";

/// Selector configuration (TOML).
///
/// Missing fields take their defaults; unknown keys are rejected so typos
/// surface instead of silently changing nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DepselectConfig {
    /// Answer used when a prompt line is blank or cannot be scanned.
    pub on_scan_failure: ScanFailurePolicy,

    /// How class names and suggestions are highlighted in prompts.
    pub emphasis: EmphasisStyle,
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `DepselectConfig::default()`.
pub fn load_config(path: &Path) -> Result<DepselectConfig> {
    if !path.exists() {
        return Ok(DepselectConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DepselectConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &DepselectConfig) -> Result<()> {
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
