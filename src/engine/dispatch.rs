use super::calendar::DateParts;
use crate::error::Result;
use crate::options::{Flags, OptionTag, OrderField, OrderSpec};
use crate::store::Store;

/// Modifiers that change how a tag renders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub abbreviate: bool,
    pub two_digit: bool,
    pub season: bool,
    pub order: OrderSpec,
}

impl Modifiers {
    pub fn new(flags: &Flags, order: Option<OrderSpec>) -> Self {
        Self {
            abbreviate: flags.abbreviate,
            two_digit: flags.two_digit,
            season: flags.season,
            order: order.unwrap_or_default(),
        }
    }
}

/// Render the value of one tag for the given date
pub fn compute(tag: OptionTag, parts: &DateParts, mods: &Modifiers) -> String {
    match tag {
        OptionTag::Day => parts.dd(),
        OptionTag::DayMonth => parts.mm(),
        OptionTag::LastMonth => parts.last_month_name().to_string(),
        OptionTag::LastQuarter => format!("Q{}", parts.last_quarter()),
        OptionTag::LastYear => parts.last_year().to_string(),
        OptionTag::Month if mods.abbreviate => parts.month_abbr().to_string(),
        OptionTag::Month => parts.month_name().to_string(),
        OptionTag::NextYear => parts.next_year().to_string(),
        OptionTag::Quarter if mods.season => parts.season().to_string(),
        OptionTag::Quarter => format!("Q{}", parts.quarter()),
        OptionTag::Terminal => terminal_date(parts, mods.order),
        OptionTag::Year if mods.two_digit => parts.yy(),
        OptionTag::Year => parts.yyyy(),
    }
}

/// `MM/DD/YYYY`, or the fields in the order given
pub fn terminal_date(parts: &DateParts, order: OrderSpec) -> String {
    order
        .0
        .iter()
        .map(|field| match field {
            OrderField::Day => parts.dd(),
            OrderField::Month => parts.mm(),
            OrderField::Year => parts.yyyy(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Compute, persist and collect the value of every validated tag, in order.
///
/// All values go to the store in one write, so a rejected key leaves the
/// store untouched.
pub fn dispatch(
    tags: &[OptionTag],
    parts: &DateParts,
    mods: &Modifiers,
    store: &Store,
) -> Result<Vec<String>> {
    let outputs: Vec<String> = tags.iter().map(|&tag| compute(tag, parts, mods)).collect();

    let writes: Vec<(&str, &str)> = tags
        .iter()
        .zip(&outputs)
        .filter_map(|(tag, value)| tag.store_key().map(|key| (key, value.as_str())))
        .collect();

    if !writes.is_empty() {
        let outcomes = store.upsert_all(&writes)?;
        for ((key, value), outcome) in writes.iter().zip(outcomes) {
            log::debug!("{}={} ({:?})", key, value, outcome);
        }
    }

    Ok(outputs)
}

/// Key and value for the no-option default mode.
///
/// The value is `MM-DD-YY`, with `/` under `--slash` and a four-digit
/// year under `--full`. The key is `_getFullDate` under `--full`, else
/// `_getDate`; with `--slash`, a bare variable name replaces it, or
/// `_getSlashDate` when only `-v` was given.
pub fn default_date(
    parts: &DateParts,
    flags: &Flags,
    var_name: Option<&str>,
) -> (String, String) {
    let sep = if flags.slash { "/" } else { "-" };
    let year = if flags.full { parts.yyyy() } else { parts.yy() };
    let value = format!("{}{sep}{}{sep}{}", parts.mm(), parts.dd(), year);

    let key = match (flags.slash, var_name) {
        (true, Some(name)) => name.to_string(),
        (true, None) if flags.var => "_getSlashDate".to_string(),
        _ if flags.full => "_getFullDate".to_string(),
        _ => "_getDate".to_string(),
    };

    (key, value)
}
