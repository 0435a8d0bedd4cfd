//! Semantic color roles and hex-color validation.
//!
//! Every color that ends up in a generated file is keyed by a [`ColorRole`]
//! and stored in a [`ColorSet`], which only ever holds validated values.

use std::collections::BTreeMap;

use crate::error::ConfigError;

/// Semantic color slot exposed to the front-end.
///
/// Declaration order is the prompt order and the order of keys in the
/// generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Dark,
    Bright,
    Success,
    Warn,
    Error,
}

impl ColorRole {
    /// Stable key used in generated TypeScript and in `[colors]` overrides.
    pub fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Dark => "dark",
            Self::Bright => "bright",
            Self::Success => "success",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Built-in default value for this role.
    pub fn default_hex(self) -> &'static str {
        match self {
            Self::Primary => "#669c35",
            Self::Secondary => "#aaaaaa",
            Self::Accent => "#fde1af",
            Self::Dark => "#0e0e11",
            Self::Bright => "#ffffff",
            Self::Success => "#00DC82",
            Self::Warn => "#fcc800",
            Self::Error => "#ff6467",
        }
    }

    /// Prompt label (`Primary`, `Secondary`, ...).
    pub fn label(self) -> String {
        let key = self.key();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }

    /// Resolve a role from its config key, case-insensitively.
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|role| role.key() == normalized)
    }

    pub fn all() -> &'static [ColorRole] {
        &[
            Self::Primary,
            Self::Secondary,
            Self::Accent,
            Self::Dark,
            Self::Bright,
            Self::Success,
            Self::Warn,
            Self::Error,
        ]
    }
}

/// True when `input` is `#` followed by exactly 3 or 6 hex digits.
pub fn is_valid_hex(input: &str) -> bool {
    let Some(digits) = input.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Expand `#RGB` or `#RRGGBB` into an RGB triple.
pub fn hex_to_rgb(input: &str) -> Option<(u8, u8, u8)> {
    if !is_valid_hex(input) {
        return None;
    }
    let digits = &input[1..];
    if digits.len() == 3 {
        // Each shorthand digit doubles: `#abc` is `#aabbcc`.
        let nibble = |idx: usize| u8::from_str_radix(&digits[idx..idx + 1], 16).ok();
        let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
        return Some((r * 17, g * 17, b * 17));
    }
    let channel = |idx: usize| u8::from_str_radix(&digits[idx..idx + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Complete role → hex mapping. Every role is always present and valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSet {
    colors: BTreeMap<ColorRole, String>,
}

impl ColorSet {
    /// Set populated with the built-in defaults.
    pub fn builtin() -> Self {
        let colors = ColorRole::all()
            .iter()
            .map(|role| (*role, role.default_hex().to_string()))
            .collect();
        Self { colors }
    }

    /// Replace one role's value, rejecting anything that is not a hex color.
    pub fn set(&mut self, role: ColorRole, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        if !is_valid_hex(value) {
            return Err(ConfigError::Invalid(format!(
                "invalid hex color `{value}` for `{}` (expected #RGB or #RRGGBB)",
                role.key()
            )));
        }
        self.colors.insert(role, value.to_string());
        Ok(())
    }

    pub fn get(&self, role: ColorRole) -> &str {
        self.colors
            .get(&role)
            .map(String::as_str)
            .unwrap_or_else(|| role.default_hex())
    }

    /// Iterate roles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &str)> {
        self.colors.iter().map(|(role, value)| (*role, value.as_str()))
    }
}

impl Default for ColorSet {
    fn default() -> Self {
        Self::builtin()
    }
}
