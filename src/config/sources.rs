//! Defaults-file source discovery.
//!
//! Source order: explicit path > local file > global file > built-ins.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::{CONFIG_DIR_NAME, DEFAULTS_FILE_NAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultsSource {
    /// Loaded from the `--config` path.
    Explicit(PathBuf),
    /// Loaded from `./elfra.toml`.
    Local,
    /// Loaded from `<config root>/elfra/elfra.toml`.
    Global(PathBuf),
    /// No file found.
    BuiltIn,
}

/// Read defaults text from the highest-precedence available source.
///
/// Only an explicit path is required to exist; discovered locations are
/// skipped when unreadable.
pub(super) fn read_defaults_text<FRead, FRoot>(
    path_override: Option<&Path>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, DefaultsSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(path) = path_override {
        let text = read_file(path)?;
        return Ok((text, DefaultsSource::Explicit(path.to_path_buf())));
    }

    if let Ok(text) = read_file(Path::new(DEFAULTS_FILE_NAME)) {
        return Ok((text, DefaultsSource::Local));
    }

    if let Some(dir) = config_root() {
        let global = dir.join(CONFIG_DIR_NAME).join(DEFAULTS_FILE_NAME);
        if let Ok(text) = read_file(&global) {
            return Ok((text, DefaultsSource::Global(global)));
        }
    }

    Ok((String::new(), DefaultsSource::BuiltIn))
}

/// Resolve the base config directory from env/home conventions.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}
