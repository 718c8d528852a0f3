use crate::error::Result;
use crate::store::Store;

/// Truncate the store, returning the confirmation line
pub fn run(store: &Store) -> Result<String> {
    log::debug!("clearing {}", store.path().display());
    store.clear()?;
    Ok("Cleared getDate variables".to_string())
}
