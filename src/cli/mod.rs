pub mod commands;

use clap::Parser;

/// Parses the process arguments into [`commands::Cli`].
pub fn parse() -> commands::Cli {
    commands::Cli::parse()
}
