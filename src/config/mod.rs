//! Prompt defaults: built-ins plus an optional `elfra.toml` override file.
//!
//! ```toml
//! [colors]
//! primary = "#336699"
//!
//! [font]
//! family = "Inter"
//! provider = "Google Fonts"
//!
//! [output]
//! config = "config.ts"
//! theme = "utils/theme.ts"
//! ```

mod defaults;
mod sources;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::color::{ColorRole, ColorSet};
use crate::error::ConfigError;
use crate::render::Variant;

use defaults::{DEFAULT_FONT, DEFAULT_FONT_PROVIDER};
pub use sources::{config_root_dir, DefaultsSource};
use sources::read_defaults_text;

/// Raw file shape. Every section and key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    colors: BTreeMap<String, String>,
    font: FontSection,
    output: OutputSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FontSection {
    family: Option<String>,
    provider: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct OutputSection {
    config: Option<PathBuf>,
    theme: Option<PathBuf>,
}

/// Resolved values offered at each prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub colors: ColorSet,
    pub font: String,
    pub font_provider: String,
    pub config_output: PathBuf,
    pub theme_output: PathBuf,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            colors: ColorSet::builtin(),
            font: DEFAULT_FONT.to_string(),
            font_provider: DEFAULT_FONT_PROVIDER.to_string(),
            config_output: Variant::Config.default_output_path(),
            theme_output: Variant::Theme.default_output_path(),
        }
    }
}

impl Defaults {
    /// Output path used when no path is given on the command line.
    pub fn output_for(&self, variant: Variant) -> &Path {
        match variant {
            Variant::Config => &self.config_output,
            Variant::Theme => &self.theme_output,
        }
    }
}

/// Defaults together with the file they came from.
#[derive(Debug, Clone)]
pub struct LoadedDefaults {
    pub defaults: Defaults,
    pub source: DefaultsSource,
}

/// Load defaults from disk.
///
/// `path_override` is an explicit file path (from `--config`).
pub fn load_defaults(path_override: Option<&Path>) -> Result<LoadedDefaults, ConfigError> {
    load_defaults_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        config_root_dir,
    )
}

fn load_defaults_from_sources<FRead, FRoot>(
    path_override: Option<&Path>,
    read_file: FRead,
    config_root: FRoot,
) -> Result<LoadedDefaults, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (text, source) = read_defaults_text(path_override, &read_file, &config_root)?;
    tracing::debug!(?source, "resolved defaults source");
    let parsed: FileConfig = toml::from_str(&text)?;
    let defaults = resolve_defaults(parsed)?;
    Ok(LoadedDefaults { defaults, source })
}

fn resolve_defaults(parsed: FileConfig) -> Result<Defaults, ConfigError> {
    let mut defaults = Defaults::default();

    for (key, value) in &parsed.colors {
        let role = ColorRole::from_key(key)
            .ok_or_else(|| ConfigError::Invalid(format!("unknown color role `{key}`")))?;
        defaults.colors.set(role, value)?;
    }

    if let Some(family) = non_empty(parsed.font.family) {
        defaults.font = family;
    }
    if let Some(provider) = non_empty(parsed.font.provider) {
        defaults.font_provider = provider;
    }
    if let Some(path) = parsed.output.config {
        defaults.config_output = require_path("output.config", path)?;
    }
    if let Some(path) = parsed.output.theme {
        defaults.theme_output = require_path("output.theme", path)?;
    }
    Ok(defaults)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn require_path(key: &str, path: PathBuf) -> Result<PathBuf, ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::Invalid(format!("{key} cannot be empty")));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn not_found(_: &Path) -> Result<String, io::Error> {
        Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
    }

    fn parse(text: &str) -> Result<Defaults, ConfigError> {
        let parsed: FileConfig = toml::from_str(text)?;
        resolve_defaults(parsed)
    }

    #[test]
    fn empty_file_yields_builtins() {
        let defaults = parse("").expect("parse");
        assert_eq!(defaults, Defaults::default());
        assert_eq!(defaults.font, "Inter");
        assert_eq!(defaults.font_provider, "Google Fonts");
        assert_eq!(defaults.output_for(Variant::Config), Path::new("config.ts"));
    }

    #[test]
    fn overrides_apply_per_key() {
        let defaults = parse(
            r##"
            [colors]
            primary = "#336699"
            Warn = "#f00"

            [font]
            family = "Roboto"

            [output]
            theme = "src/theme.ts"
            "##,
        )
        .expect("parse");
        assert_eq!(defaults.colors.get(ColorRole::Primary), "#336699");
        assert_eq!(defaults.colors.get(ColorRole::Warn), "#f00");
        assert_eq!(defaults.colors.get(ColorRole::Dark), "#0e0e11");
        assert_eq!(defaults.font, "Roboto");
        assert_eq!(defaults.font_provider, "Google Fonts");
        assert_eq!(defaults.output_for(Variant::Theme), Path::new("src/theme.ts"));
    }

    #[test]
    fn invalid_hex_is_rejected() {
        let err = parse("[colors]\nprimary = \"green\"\n").expect_err("must fail");
        assert!(matches!(err, ConfigError::Invalid(_)), "got: {err}");
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = parse("[colors]\ninfo = \"#123\"\n").expect_err("must fail");
        assert!(err.to_string().contains("unknown color role `info`"), "got: {err}");
    }

    #[test]
    fn unknown_section_is_rejected() {
        let err = parse("[auth]\nenabled = true\n").expect_err("must fail");
        assert!(matches!(err, ConfigError::Toml(_)), "got: {err}");
    }

    #[test]
    fn blank_font_keeps_builtin() {
        let defaults = parse("[font]\nfamily = \"  \"\n").expect("parse");
        assert_eq!(defaults.font, "Inter");
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_defaults_from_sources(Some(Path::new("missing.toml")), not_found, || None)
            .expect_err("must fail");
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn no_files_falls_back_to_builtins() {
        let loaded = load_defaults_from_sources(None, not_found, || None).expect("load");
        assert_eq!(loaded.source, DefaultsSource::BuiltIn);
        assert_eq!(loaded.defaults, Defaults::default());
    }

    #[test]
    fn local_file_wins_over_global() {
        let root = PathBuf::from("/cfg");
        let loaded = load_defaults_from_sources(
            None,
            |path| {
                if path == Path::new("elfra.toml") {
                    Ok("[font]\nfamily = \"Local\"\n".to_string())
                } else {
                    Ok("[font]\nfamily = \"Global\"\n".to_string())
                }
            },
            || Some(root.clone()),
        )
        .expect("load");
        assert_eq!(loaded.source, DefaultsSource::Local);
        assert_eq!(loaded.defaults.font, "Local");
    }

    #[test]
    fn global_file_used_when_no_local_file() {
        let loaded = load_defaults_from_sources(
            None,
            |path| {
                if path == Path::new("/cfg/elfra/elfra.toml") {
                    Ok("[font]\nprovider = \"Bunny Fonts\"\n".to_string())
                } else {
                    not_found(path)
                }
            },
            || Some(PathBuf::from("/cfg")),
        )
        .expect("load");
        assert_eq!(
            loaded.source,
            DefaultsSource::Global(PathBuf::from("/cfg/elfra/elfra.toml"))
        );
        assert_eq!(loaded.defaults.font_provider, "Bunny Fonts");
    }
}
