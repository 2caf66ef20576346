use clap::Parser; // Derive-based argument parsing from the `clap` crate.

/// Command-line interface for the `edgedu` utility.
///
/// There are no subcommands: the tool has exactly one job, so the top-level
/// arguments are the whole surface. Zero positional arguments mean "report
/// on the invoking user"; explicit usernames are processed in the order
/// given.
#[derive(Parser)]
#[command(
    name = "edgedu", // Executable name shown in help messages.
    about = "📊 Microsoft Edge storage usage calculator for macOS",
    version // Version string is taken from Cargo.toml.
)]
pub struct Cli {
    /// Users to report on; defaults to the current user
    #[arg(value_name = "USERNAME")]
    pub usernames: Vec<String>,

    /// Show debug diagnostics on stderr
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_no_usernames() {
        let cli = Cli::try_parse_from(["edgedu"]).unwrap();
        assert!(cli.usernames.is_empty());
        assert!(!cli.debug);
    }

    #[test]
    fn usernames_keep_their_order() {
        let cli = Cli::try_parse_from(["edgedu", "alice", "bob", "carol"]).unwrap();
        assert_eq!(cli.usernames, ["alice", "bob", "carol"]);
    }

    #[test]
    fn debug_flag_parses_alongside_usernames() {
        let cli = Cli::try_parse_from(["edgedu", "--debug", "alice"]).unwrap();
        assert!(cli.debug);
        assert_eq!(cli.usernames, ["alice"]);
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Cli::try_parse_from(["edgedu", "--frobnicate"]).is_err());
    }
}
