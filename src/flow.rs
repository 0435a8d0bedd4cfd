//! The interactive generator run: ask, render, write.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::color::{ColorRole, ColorSet};
use crate::config::Defaults;
use crate::error::{AppError, PromptError};
use crate::prompt::Prompter;
use crate::render::{
    render_config_ts, render_theme_ts, AuthCredentials, AuthSettings, SiteConfig, Variant,
};
use crate::writer::{write_output, OverwritePolicy, WriteOutcome};

pub const BANNER: &str = "ELFRA Config Tool";
const BANNER_HINT: &str = "Enter HEX colors or press Enter to keep the default.";

/// Per-run choices made on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub variant: Variant,
    pub output: PathBuf,
    pub overwrite: OverwritePolicy,
}

/// Ask for every color role in order.
pub fn collect_colors<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    defaults: &ColorSet,
) -> Result<ColorSet, PromptError> {
    let mut colors = defaults.clone();
    for role in ColorRole::all() {
        let value = prompter.color(&role.label(), defaults.get(*role))?;
        // The prompter only returns validated values.
        if colors.set(*role, &value).is_err() {
            tracing::warn!(role = role.key(), value = %value, "prompt returned invalid color");
        }
    }
    Ok(colors)
}

/// Ask whether user management is enabled and, if so, for its credentials.
pub fn collect_auth<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<AuthSettings, PromptError> {
    if !prompter.confirm("Enable user management?")? {
        return Ok(AuthSettings::Disabled);
    }
    let provider = prompter.read_line("  Auth provider: ")?;
    let public_key = prompter.read_line("  Public key: ")?;
    let secret_key = prompter.secret("  Secret key")?;
    let server = prompter.read_line("  Server URL: ")?;
    Ok(AuthSettings::Enabled(AuthCredentials {
        provider,
        public_key,
        secret_key,
        server,
    }))
}

/// Collect everything the `config` variant needs.
pub fn collect_site_config<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    defaults: &Defaults,
) -> Result<SiteConfig, PromptError> {
    let colors = collect_colors(prompter, &defaults.colors)?;
    let font = prompter.text("Font family", &defaults.font)?;
    let font_provider = prompter.text("Font provider", &defaults.font_provider)?;
    let auth = collect_auth(prompter)?;
    Ok(SiteConfig {
        colors,
        font,
        font_provider,
        auth,
    })
}

/// Run one full session and report what happened to the output file.
pub fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    defaults: &Defaults,
    options: &RunOptions,
) -> Result<WriteOutcome, AppError> {
    let palette = prompter.palette();
    prompter.say(&palette.title(BANNER))?;
    prompter.say(&palette.hint(BANNER_HINT))?;
    prompter.say("")?;

    let content = match options.variant {
        Variant::Config => render_config_ts(&collect_site_config(prompter, defaults)?),
        Variant::Theme => render_theme_ts(&collect_colors(prompter, &defaults.colors)?),
    };

    let outcome = write_output(&options.output, &content, options.overwrite, |path| {
        let question = palette.warn(&format!(
            "File '{}' already exists. Overwrite?",
            path.display()
        ));
        prompter.confirm(&question)
    })?;

    match &outcome {
        WriteOutcome::Declined { .. } => prompter.say(&palette.error("Aborted."))?,
        WriteOutcome::Created { path } | WriteOutcome::Overwritten { path } => {
            prompter.say("")?;
            prompter.say(&palette.success(&format!(
                "Config file written to: {}",
                path.display()
            )))?;
        }
    }
    Ok(outcome)
}
