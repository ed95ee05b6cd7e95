use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, Format};

/// Translate utility class tokens into React Native inline style literals.
#[derive(Parser, Debug)]
#[command(name = "utility-style", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// TOML config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Fail on malformed values such as `text-[abcpx]`.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output wrapping (overrides the config file).
    #[arg(long, value_enum, global = true)]
    pub format: Option<Format>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate a token string. Reads standard input when no tokens are given.
    Translate {
        /// Utility tokens, e.g. `flex-row mb-4`.
        tokens: Vec<String>,

        /// Print tokens that produced nothing to standard error.
        #[arg(long)]
        report: bool,
    },

    /// Rewrite `className="..."` attributes read from standard input.
    Rewrite,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if self.strict {
            config.strict = true;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config
    }

    /// Default log filter for this invocation.
    pub fn log_level<'a>(&self, config: &'a Config) -> &'a str {
        match self.verbose {
            0 => config.log_level.as_deref().unwrap_or("warn"),
            1 => "debug",
            _ => "trace",
        }
    }
}
