//! ELFRA config generator.
//!
//! Interactively collects theme colors, font settings and optional auth
//! settings, then writes them as a typed TypeScript configuration module
//! for the web front-end.
//!
//! # Quick start
//!
//! ```no_run
//! use elfra_config::config::load_defaults;
//! use elfra_config::flow::{run, RunOptions};
//! use elfra_config::prompt::Prompter;
//! use elfra_config::render::Variant;
//! use elfra_config::ui::Palette;
//! use elfra_config::writer::OverwritePolicy;
//!
//! let defaults = load_defaults(None).unwrap().defaults;
//! let options = RunOptions {
//!     variant: Variant::Config,
//!     output: defaults.output_for(Variant::Config).to_path_buf(),
//!     overwrite: OverwritePolicy::Ask,
//! };
//! let mut prompter = Prompter::new(std::io::stdin().lock(), std::io::stdout(), Palette::plain());
//! run(&mut prompter, &defaults, &options).unwrap();
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod flow;
pub mod prompt;
pub mod render;
#[cfg(test)]
pub mod testsupport;
pub mod ui;
pub mod writer;
