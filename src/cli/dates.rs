use crate::engine::{self, DateParts, Modifiers};
use crate::error::Result;
use crate::options::Invocation;
use crate::store::Store;

/// Default mode or validated slash options, returning the output line.
///
/// Validation runs over every token before anything is written.
pub fn run(invocation: &Invocation, store: &Store, parts: &DateParts) -> Result<String> {
    if invocation.tokens.is_empty() {
        let (key, value) =
            engine::default_date(parts, &invocation.flags, invocation.var_name.as_deref());
        store.upsert(&key, &value)?;
        log::debug!("default mode -> {}={}", key, value);
        return Ok(value);
    }

    let tags = engine::validate(&invocation.tokens)?;
    let mods = Modifiers::new(&invocation.flags, invocation.order);
    let outputs = engine::dispatch(&tags, parts, &mods, store)?;

    Ok(outputs.join(" "))
}
