use crate::engine::DateParts;
use crate::error::Result;
use crate::store::Store;

/// Store key for the leap-year flag
pub const LEAP_KEY: &str = "_checkLeapYear";

/// Persist `1` or `0` for the current year and return it
pub fn run(store: &Store, parts: &DateParts) -> Result<String> {
    let value = if parts.is_leap() { "1" } else { "0" };
    store.upsert(LEAP_KEY, value)?;
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Limits;
    use crate::store::Entry;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn run_for(year: i32, store: &Store) -> String {
        let parts = NaiveDate::from_ymd_opt(year, 3, 15).unwrap().into();
        run(store, &parts).unwrap()
    }

    #[test]
    fn test_leap_flag_persisted() {
        let temp = TempDir::new().unwrap();
        let store = Store::new(temp.path().join("vars.env"), Limits::default());

        assert_eq!(run_for(2024, &store), "1");
        assert_eq!(store.load().unwrap(), vec![Entry::new(LEAP_KEY, "1")]);

        assert_eq!(run_for(2023, &store), "0");
        assert_eq!(store.load().unwrap(), vec![Entry::new(LEAP_KEY, "0")]);
    }
}
