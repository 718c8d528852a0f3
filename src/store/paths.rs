use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use crate::error::{GetDateError, Result};

/// Environment variable consulted first for the state root
pub const STATE_HOME_VAR: &str = "XDG_STATE_HOME";

/// Environment variable consulted second
pub const HOME_VAR: &str = "HOME";

const APP_DIR: &str = "getDate";
const STATE_FILE: &str = "vars.env";
const FALLBACK_DIR: &str = ".getDate_state";

/// Location of the state directory and the store file inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePaths {
    pub dir: PathBuf,
    pub file: PathBuf,
}

/// Resolve state paths from an environment lookup.
///
/// Precedence: `$XDG_STATE_HOME/getDate`, then `$HOME/.local/state/getDate`,
/// then `./.getDate_state`. Empty variables count as unset.
pub fn resolve_paths<F>(lookup: F) -> StatePaths
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| lookup(name).filter(|v| !v.is_empty());

    let dir = if let Some(state_home) = non_empty(STATE_HOME_VAR) {
        PathBuf::from(state_home).join(APP_DIR)
    } else if let Some(home) = non_empty(HOME_VAR) {
        PathBuf::from(home).join(".local").join("state").join(APP_DIR)
    } else {
        PathBuf::from(FALLBACK_DIR)
    };

    let file = dir.join(STATE_FILE);
    StatePaths { dir, file }
}

/// Resolve state paths from the process environment
pub fn resolve_paths_from_env() -> StatePaths {
    resolve_paths(|name| std::env::var(name).ok())
}

/// Create the state directory and an empty store file if either is missing
pub fn ensure_ready(paths: &StatePaths) -> Result<()> {
    // create_dir_all already treats an existing directory as success
    fs::create_dir_all(&paths.dir).map_err(|e| {
        GetDateError::Store(format!(
            "cannot create state directory {}: {}",
            paths.dir.display(),
            e
        ))
    })?;

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&paths.file)
        .map_err(|e| {
            GetDateError::Store(format!(
                "cannot initialize state file {}: {}",
                paths.file.display(),
                e
            ))
        })?;

    log::debug!("state file ready at {}", paths.file.display());
    Ok(())
}
