//! CLI argument parsing via clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use elfra_config::render::Variant;

/// Generate the front-end theme/config module from interactive answers.
#[derive(Debug, Parser)]
#[command(name = "elfra-config", version)]
pub struct Args {
    /// Output file (default: config.ts, or utils/theme.ts with --variant theme).
    pub output: Option<PathBuf>,

    /// Shape of the generated file.
    #[arg(long = "variant", value_enum, default_value_t = VariantArg::Config)]
    pub variant: VariantArg,

    /// Path to a defaults file (default: ./elfra.toml or ~/.config/elfra/elfra.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Overwrite an existing output file without asking.
    #[arg(long = "force")]
    pub force: bool,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// Colors, font, font provider and auth settings.
    Config,
    /// Colors only.
    Theme,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Config => Variant::Config,
            VariantArg::Theme => Variant::Theme,
        }
    }
}
