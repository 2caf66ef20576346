use crate::log_debug;
// Swallowed lookup failures are traced at debug level so they stay auditable.
use std::env;
// The invoking user's identity and home come straight from the environment.
use std::path::PathBuf;
use std::process::Command;
// `Command` spawns the external `dscl` directory-service query.
use thiserror::Error;

/// The key `dscl` prints in front of the home directory path in its
/// key/value output.
const NFS_HOME_DIRECTORY_KEY: &str = "NFSHomeDirectory:";

/// Why the directory-service lookup produced no usable home directory.
///
/// Every variant maps to the same documented fallback (the resolution step
/// fails and the caller moves on to "user not found"), but naming each case
/// keeps the swallowed failures visible instead of hiding them behind a
/// blanket catch.
#[derive(Debug, Error)]
pub enum DirectoryServiceError {
    /// `dscl` could not be spawned at all (binary missing, fork failure).
    #[error("failed to run dscl: {0}")]
    Spawn(#[from] std::io::Error),
    /// `dscl` ran but exited unsuccessfully, typically because the user
    /// record does not exist.
    #[error("dscl exited with {0}")]
    Unsuccessful(std::process::ExitStatus),
    /// The query succeeded but its output carried no `NFSHomeDirectory:`
    /// field.
    #[error("no NFSHomeDirectory field in dscl output")]
    FieldMissing,
    /// The record named a home directory that does not exist on disk.
    #[error("reported home directory {} is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

/// Returns the username this process runs as, taken from the environment
/// (`USER`, then `LOGNAME`). No filesystem probing, no process spawn.
pub fn current_username() -> Option<String> {
    env::var("USER").or_else(|_| env::var("LOGNAME")).ok()
}

/// Resolves `username` to that account's home directory.
///
/// Strategies are tried in order and the first success wins:
/// 1. the invoking user's own home, straight from `HOME`;
/// 2. the conventional `/Users/{username}` location, if it is a directory;
/// 3. a `dscl` query for the account record's `NFSHomeDirectory` attribute.
///
/// # Returns
/// `Some(home)` when a strategy produced an existing directory, `None` when
/// all three failed. Failures of the external query, including a missing
/// `dscl` binary or a non-zero exit, are absorbed here and never propagated.
pub fn resolve_home(username: &str) -> Option<PathBuf> {
    // An empty name would otherwise match /Users/ itself.
    if username.is_empty() {
        return None;
    }

    // The invoking user's home is already in the environment; resolving it
    // needs neither a filesystem check nor a process spawn.
    if current_username().as_deref() == Some(username) {
        if let Ok(home) = env::var("HOME") {
            return Some(PathBuf::from(home));
        }
    }

    // The conventional location for local accounts.
    let conventional = PathBuf::from(format!("/Users/{username}"));
    if conventional.is_dir() {
        return Some(conventional);
    }

    // Last resort: ask directory services. Whatever goes wrong, this step
    // merely failed; the user is reported as not found.
    match query_directory_service(username) {
        Ok(home) => Some(home),
        Err(failure) => {
            log_debug!("directory-service lookup for '{username}' failed: {failure}");
            None
        }
    }
}

/// Runs `dscl . -read /Users/{username} NFSHomeDirectory` and validates the
/// home directory it reports.
fn query_directory_service(username: &str) -> Result<PathBuf, DirectoryServiceError> {
    let record = format!("/Users/{username}");
    let output = Command::new("dscl")
        .args([".", "-read", &record, "NFSHomeDirectory"])
        .output()?;

    if !output.status.success() {
        return Err(DirectoryServiceError::Unsuccessful(output.status));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let home = parse_home_directory(&stdout).ok_or(DirectoryServiceError::FieldMissing)?;
    if home.is_dir() {
        Ok(home)
    } else {
        Err(DirectoryServiceError::NotADirectory(home))
    }
}

/// Extracts the home directory from `dscl` key/value output: the first line
/// carrying [`NFS_HOME_DIRECTORY_KEY`] yields everything after the key,
/// trimmed of surrounding whitespace.
fn parse_home_directory(output: &str) -> Option<PathBuf> {
    output.lines().find_map(|line| {
        line.split_once(NFS_HOME_DIRECTORY_KEY)
            .map(|(_, value)| PathBuf::from(value.trim()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_home_directory_field() {
        let output = "AppleMetaNodeLocation: /Local/Default\n\
                      NFSHomeDirectory: /Users/edge\n\
                      RecordName: edge\n";
        assert_eq!(
            parse_home_directory(output),
            Some(PathBuf::from("/Users/edge"))
        );
    }

    #[test]
    fn trims_whitespace_around_the_value() {
        let output = "NFSHomeDirectory:    /var/empty   \n";
        assert_eq!(
            parse_home_directory(output),
            Some(PathBuf::from("/var/empty"))
        );
    }

    #[test]
    fn missing_field_parses_to_none() {
        assert_eq!(parse_home_directory("RecordName: edge\n"), None);
        assert_eq!(parse_home_directory(""), None);
    }

    #[test]
    fn current_user_resolves_from_the_environment() {
        // Only meaningful when the test environment carries an identity.
        if let (Some(user), Ok(home)) = (current_username(), env::var("HOME")) {
            if !user.is_empty() {
                assert_eq!(resolve_home(&user), Some(PathBuf::from(home)));
            }
        }
    }

    #[test]
    fn empty_username_never_resolves() {
        assert_eq!(resolve_home(""), None);
    }

    #[test]
    fn unknown_user_does_not_resolve() {
        // No /Users entry and no directory-service record on any sane host;
        // on machines without `dscl` the spawn failure is absorbed the same
        // way.
        assert_eq!(resolve_home("edgedu-no-such-user-zz9"), None);
    }
}
