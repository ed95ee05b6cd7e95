//! `utility-style` command-line tool.
//!
//! ```text
//! $ utility-style translate flex-row items-center mb-4
//! { flexDirection: 'row', alignItems: 'center', marginBottom: 16 }
//! $ echo '<View className="flex-1 p-4" />' | utility-style rewrite
//! <View style={{ flex: 1, padding: 16 }} />
//! ```

mod cli;
mod config;
mod error;
mod input;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use utility_style::prelude::{rewrite_class_names, Translator};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.apply_overrides(Config::load(cli.config.as_deref())?);
    init_logging(cli.log_level(&config));
    tracing::debug!(?config, "loaded configuration");

    let translator = Translator::with_options(config.translate_options());
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Command::Translate { tokens, report } => {
            let input = if tokens.is_empty() {
                read_stdin()?
            } else {
                tokens.join(" ")
            };
            if *report {
                let translation = translator.translate_report(&input)?;
                for token in &translation.ignored {
                    eprintln!("ignored: {token}");
                }
                for token in &translation.unresolved {
                    eprintln!("unresolved: {token}");
                }
            }
            let output = if config.strict {
                translator.try_translate(&input)?
            } else {
                translator.translate(&input)
            };
            writeln!(stdout, "{output}")?;
        }
        Command::Rewrite => {
            let source = read_stdin()?;
            let (output, summary) = rewrite_class_names(&source, &translator)?;
            tracing::info!(
                rewritten = summary.rewritten,
                kept = summary.kept,
                "rewrite finished"
            );
            stdout.write_all(output.as_bytes())?;
        }
    }

    stdout.flush()?;
    Ok(())
}

fn read_stdin() -> Result<String> {
    input::read_lossy(io::stdin().lock())
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
