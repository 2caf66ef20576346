use colored::Colorize; // Import the `Colorize` trait so the banner and guard message can be styled with ANSI colors.
use edgedu::core::categories::edge_categories; // Import the fixed Edge category table shared by every report.
use edgedu::core::{reporter, resolver}; // Import the per-user reporter and the username-to-home resolver.
use edgedu::{cli, log_debug, log_warn, logger}; // Import the CLI parser, the logging macros, and the logger initializer.

/// The main entry point of the `edgedu` application.
///
/// Responsible for:
/// 1. Parsing command-line arguments and initializing the logger.
/// 2. Refusing to run on anything but macOS.
/// 3. Printing the banner and running one report per requested user.
fn main() {
    let cli = cli::parse(); // Parse the command-line arguments into the `Cli` struct.

    // Initialize the logger from the `--debug` flag. Debug messages are
    // suppressed unless the flag was given; the other levels always emit.
    logger::init(cli.debug);

    // The category paths and the directory-service fallback are macOS
    // conventions; on any other OS the report would be meaningless.
    if !cfg!(target_os = "macos") {
        println!("{}", "Error: This tool is designed for macOS only".red());
        std::process::exit(1); // The only non-zero exit the tool produces.
    }

    // The boxed banner precedes every per-user section.
    println!("{}", format!("╔{}╗", "═".repeat(60)).green());
    println!(
        "{}",
        "║     Microsoft Edge Storage Usage Calculator for macOS     ║".green()
    );
    println!("{}", format!("╚{}╝", "═".repeat(60)).green());

    // With no arguments the tool reports on the invoking user, identified
    // from the process environment.
    let usernames = if cli.usernames.is_empty() {
        match resolver::current_username() {
            Some(current) => vec![current], // The invoking user's account name.
            None => {
                // Degrade to an unresolvable name; the report loop prints
                // its usual "not found" line instead of aborting.
                log_warn!("neither USER nor LOGNAME is set; cannot tell who the current user is");
                vec![String::new()]
            }
        }
    } else {
        cli.usernames // Explicit usernames are processed exactly as given, in order.
    };

    log_debug!("reporting on {} user(s)", usernames.len());

    let categories = edge_categories(); // Build the category table once; every report borrows it.

    // One full section per user. A failed resolution prints its own error
    // line inside `report` and never stops the loop.
    for username in &usernames {
        if !reporter::report(username, &categories) {
            log_debug!("no report produced for '{}'", username);
        }
    }

    println!(); // The run always closes with a blank line.
}
