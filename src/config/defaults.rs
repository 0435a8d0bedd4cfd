//! Built-in prompt defaults.

/// Font family offered when the user presses Enter.
pub(super) const DEFAULT_FONT: &str = "Inter";
/// Font provider offered when the user presses Enter.
pub(super) const DEFAULT_FONT_PROVIDER: &str = "Google Fonts";
/// File name looked up in the working directory and the config root.
pub(super) const DEFAULTS_FILE_NAME: &str = "elfra.toml";
/// Directory under the config root that holds the global defaults file.
pub(super) const CONFIG_DIR_NAME: &str = "elfra";
