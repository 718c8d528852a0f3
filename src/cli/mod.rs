//! Command-line modes
//!
//! One invocation runs exactly one mode, first match wins:
//! - help (`/?`) and edit hint (`--edit-all`): no state touched
//! - clear (`--clear-var`): truncate the store
//! - leap (`--leap`): persist the leap-year flag
//! - dates: default mode or validated slash options
pub mod clear;
pub mod dates;
pub mod help;
pub mod leap;

use chrono::NaiveDate;

use crate::config;
use crate::engine::DateParts;
use crate::error::Result;
use crate::options::Invocation;
use crate::store::{self, StatePaths, Store};

/// Run the mode selected by `invocation` for the date `today`.
///
/// Returns the line to print, if the mode produces one. Printing it is
/// left to the caller, which honours the output mode.
pub fn execute(
    invocation: &Invocation,
    paths: &StatePaths,
    today: NaiveDate,
) -> Result<Option<String>> {
    if invocation.flags.help {
        help::show(invocation.flags.edit_hint);
        return Ok(None);
    }
    if invocation.flags.edit_all {
        help::edit_all();
        return Ok(None);
    }

    store::ensure_ready(paths)?;
    let config = config::load_or_default(&paths.dir)?;
    let store = Store::new(&paths.file, config.limits);

    if invocation.flags.clear {
        return clear::run(&store).map(Some);
    }

    let parts = DateParts::from(today);

    if invocation.flags.leap {
        return leap::run(&store, &parts).map(Some);
    }

    dates::run(invocation, &store, &parts).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{resolve_paths, Entry};
    use std::fs;
    use tempfile::TempDir;

    fn paths_in(temp: &TempDir) -> StatePaths {
        let root = temp.path().to_str().unwrap().to_string();
        resolve_paths(move |name| (name == "XDG_STATE_HOME").then(|| root.clone()))
    }

    fn march_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn exec(args: &[&str], paths: &StatePaths) -> Result<Option<String>> {
        execute(&Invocation::parse(args), paths, march_15())
    }

    #[test]
    fn test_help_touches_no_state() {
        let temp = TempDir::new().unwrap();
        let paths = paths_in(&temp);

        assert_eq!(exec(&["/?", "/D"], &paths).unwrap(), None);
        assert!(!paths.dir.exists());
    }

    #[test]
    fn test_default_mode_creates_store() {
        let temp = TempDir::new().unwrap();
        let paths = paths_in(&temp);

        let line = exec(&[], &paths).unwrap();
        assert_eq!(line.as_deref(), Some("03-15-24"));
        assert_eq!(fs::read_to_string(&paths.file).unwrap(), "_getDate=03-15-24\n");
    }

    #[test]
    fn test_clear_ignores_other_options() {
        let temp = TempDir::new().unwrap();
        let paths = paths_in(&temp);

        exec(&["/Y"], &paths).unwrap();
        let line = exec(&["--clear-var", "/Y", "/LY"], &paths).unwrap();

        assert_eq!(line.as_deref(), Some("Cleared getDate variables"));
        assert_eq!(fs::read_to_string(&paths.file).unwrap(), "");
    }

    #[test]
    fn test_leap_short_circuits_options() {
        let temp = TempDir::new().unwrap();
        let paths = paths_in(&temp);

        let line = exec(&["--leap", "/DM"], &paths).unwrap();
        assert_eq!(line.as_deref(), Some("1"));

        let store = Store::new(&paths.file, Default::default());
        assert_eq!(store.load().unwrap(), vec![Entry::new("_checkLeapYear", "1")]);
    }

    #[test]
    fn test_quiet_mode_still_persists() {
        let temp = TempDir::new().unwrap();
        let paths = paths_in(&temp);

        let invocation = Invocation::parse(&["/M", "0"]);
        assert!(!invocation.prints());
        execute(&invocation, &paths, march_15()).unwrap();

        assert_eq!(fs::read_to_string(&paths.file).unwrap(), "_theMonth=March\n");
    }

    #[test]
    fn test_config_limits_applied() {
        let temp = TempDir::new().unwrap();
        let paths = paths_in(&temp);
        fs::create_dir_all(&paths.dir).unwrap();
        fs::write(
            paths.dir.join(config::CONFIG_FILE_NAME),
            "[limits]\nmax_entries = 1\non_full = \"reject\"\n",
        )
        .unwrap();

        exec(&["/Y"], &paths).unwrap();
        assert!(exec(&["/M"], &paths).is_err());
        assert_eq!(fs::read_to_string(&paths.file).unwrap(), "_theYear=2024\n");
    }
}
