//! TypeScript source generation.
//!
//! Both renderers are pure: the same input always yields byte-identical
//! text. Output has no trailing newline.

use std::path::PathBuf;

use crate::color::ColorSet;

/// Shape of the generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Colors, font, font provider and auth settings as `config`.
    #[default]
    Config,
    /// Colors only, exported as `theme`.
    Theme,
}

impl Variant {
    /// Built-in output path used when neither CLI nor defaults file set one.
    pub fn default_output_path(self) -> PathBuf {
        match self {
            Self::Config => PathBuf::from("config.ts"),
            Self::Theme => PathBuf::from("utils").join("theme.ts"),
        }
    }
}

/// Credentials collected when user management is switched on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthCredentials {
    pub provider: String,
    pub public_key: String,
    pub secret_key: String,
    pub server: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthSettings {
    #[default]
    Disabled,
    Enabled(AuthCredentials),
}

impl AuthSettings {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }
}

/// Everything the full `config` variant renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub colors: ColorSet,
    pub font: String,
    pub font_provider: String,
    pub auth: AuthSettings,
}

/// Render the full `config` interface and constant.
pub fn render_config_ts(site: &SiteConfig) -> String {
    let mut lines = vec!["export interface config  {".to_string()];
    push_color_fields(&mut lines, &site.colors);
    lines.push("  font: string;".to_string());
    lines.push("  fontProvider: string;".to_string());
    lines.push("  auth: {".to_string());
    lines.push("    enabled: boolean;".to_string());
    lines.push("    provider?: string;".to_string());
    lines.push("    publicKey?: string;".to_string());
    lines.push("    secretKey?: string;".to_string());
    lines.push("    server?: string;".to_string());
    lines.push("  };".to_string());
    lines.push("}\n".to_string());

    lines.push("export const config: config = {".to_string());
    push_color_values(&mut lines, &site.colors);
    lines.push(format!("  font: {},", ts_string(&site.font)));
    lines.push(format!("  fontProvider: {},", ts_string(&site.font_provider)));
    lines.push("  auth: {".to_string());
    lines.push(format!("    enabled: {},", site.auth.is_enabled()));
    if let AuthSettings::Enabled(credentials) = &site.auth {
        lines.push(format!("    provider: {},", ts_string(&credentials.provider)));
        lines.push(format!("    publicKey: {},", ts_string(&credentials.public_key)));
        lines.push(format!("    secretKey: {},", ts_string(&credentials.secret_key)));
        lines.push(format!("    server: {},", ts_string(&credentials.server)));
    }
    lines.push("  }".to_string());
    lines.push("};".to_string());
    lines.join("\n")
}

/// Render the colors-only `theme` interface and constant.
pub fn render_theme_ts(colors: &ColorSet) -> String {
    let mut lines = vec!["export interface Theme {".to_string()];
    push_color_fields(&mut lines, colors);
    lines.push("}\n".to_string());

    lines.push("export const theme: Theme = {".to_string());
    push_color_values(&mut lines, colors);
    lines.push("};".to_string());
    lines.join("\n")
}

fn push_color_fields(lines: &mut Vec<String>, colors: &ColorSet) {
    lines.push("  colors: {".to_string());
    for (role, _) in colors.iter() {
        lines.push(format!("    {}: string;", role.key()));
    }
    lines.push("  };".to_string());
}

fn push_color_values(lines: &mut Vec<String>, colors: &ColorSet) {
    lines.push("  colors: {".to_string());
    for (role, value) in colors.iter() {
        lines.push(format!("    {}: {},", role.key(), ts_string(value)));
    }
    lines.push("  },".to_string());
}

/// Double-quoted TypeScript string literal.
fn ts_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorRole;

    fn site(auth: AuthSettings) -> SiteConfig {
        let mut colors = ColorSet::builtin();
        colors.set(ColorRole::Primary, "#123456").expect("valid");
        SiteConfig {
            colors,
            font: "Inter".to_string(),
            font_provider: "Google Fonts".to_string(),
            auth,
        }
    }

    #[test]
    fn disabled_auth_matches_fixed_block() {
        let expected = "\
export interface config  {
  colors: {
    primary: string;
    secondary: string;
    accent: string;
    dark: string;
    bright: string;
    success: string;
    warn: string;
    error: string;
  };
  font: string;
  fontProvider: string;
  auth: {
    enabled: boolean;
    provider?: string;
    publicKey?: string;
    secretKey?: string;
    server?: string;
  };
}

export const config: config = {
  colors: {
    primary: \"#123456\",
    secondary: \"#aaaaaa\",
    accent: \"#fde1af\",
    dark: \"#0e0e11\",
    bright: \"#ffffff\",
    success: \"#00DC82\",
    warn: \"#fcc800\",
    error: \"#ff6467\",
  },
  font: \"Inter\",
  fontProvider: \"Google Fonts\",
  auth: {
    enabled: false,
  }
};";
        assert_eq!(render_config_ts(&site(AuthSettings::Disabled)), expected);
    }

    #[test]
    fn enabled_auth_emits_all_credentials() {
        let out = render_config_ts(&site(AuthSettings::Enabled(AuthCredentials {
            provider: "supabase".to_string(),
            public_key: "pk_1".to_string(),
            secret_key: "sk_1".to_string(),
            server: "https://auth.example.com".to_string(),
        })));
        assert!(out.contains("    enabled: true,\n"));
        assert!(out.contains("    provider: \"supabase\",\n"));
        assert!(out.contains("    publicKey: \"pk_1\",\n"));
        assert!(out.contains("    secretKey: \"sk_1\",\n"));
        assert!(out.contains("    server: \"https://auth.example.com\",\n  }\n};"));
    }

    #[test]
    fn disabled_auth_omits_credential_values() {
        let out = render_config_ts(&site(AuthSettings::Disabled));
        for key in ["provider:", "publicKey:", "secretKey:", "server:"] {
            assert!(!out.contains(key), "unexpected {key} in output");
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let input = site(AuthSettings::Disabled);
        assert_eq!(render_config_ts(&input), render_config_ts(&input));
    }

    #[test]
    fn string_values_are_escaped() {
        let mut input = site(AuthSettings::Disabled);
        input.font = "Fira \"Code\" \\ Mono".to_string();
        let out = render_config_ts(&input);
        assert!(out.contains(r#"  font: "Fira \"Code\" \\ Mono","#), "got: {out}");
    }

    #[test]
    fn theme_variant_renders_colors_only() {
        let out = render_theme_ts(&ColorSet::builtin());
        assert!(out.starts_with("export interface Theme {\n  colors: {\n    primary: string;"));
        assert!(out.contains("}\n\nexport const theme: Theme = {\n  colors: {\n"));
        assert!(out.contains("    error: \"#ff6467\",\n  },\n};"));
        assert!(!out.contains("font"));
        assert!(!out.contains("auth"));
    }

    #[test]
    fn default_output_paths_per_variant() {
        assert_eq!(Variant::Config.default_output_path(), PathBuf::from("config.ts"));
        assert_eq!(
            Variant::Theme.default_output_path(),
            PathBuf::from("utils").join("theme.ts")
        );
    }
}
