//! CLI entry point for elfra-config.

mod cli;

use std::io::IsTerminal;

use clap::Parser;
use elfra_config::config::load_defaults;
use elfra_config::error::{AppError, PromptError};
use elfra_config::flow::{run, RunOptions};
use elfra_config::prompt::Prompter;
use elfra_config::render::Variant;
use elfra_config::ui::Palette;
use elfra_config::writer::OverwritePolicy;
use tracing_subscriber::EnvFilter;

/// Exit status when stdin closes before all answers were given.
const EXIT_INTERRUPTED: i32 = 130;

fn main() {
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ELFRA_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let loaded = match load_defaults(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    tracing::debug!(source = ?loaded.source, "loaded defaults");

    let variant = Variant::from(args.variant);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| loaded.defaults.output_for(variant).to_path_buf());
    let options = RunOptions {
        variant,
        output,
        overwrite: if args.force {
            OverwritePolicy::Force
        } else {
            OverwritePolicy::Ask
        },
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let color =
        !args.no_color && std::env::var_os("NO_COLOR").is_none() && stdout.is_terminal();
    let interactive = stdin.is_terminal();
    let mut prompter =
        Prompter::new(stdin.lock(), stdout, Palette::new(color)).with_hidden_secrets(interactive);

    match run(&mut prompter, &loaded.defaults, &options) {
        Ok(_) => {}
        Err(AppError::Prompt(PromptError::Closed)) => {
            eprintln!();
            eprintln!("error: input closed; nothing was written");
            std::process::exit(EXIT_INTERRUPTED);
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
