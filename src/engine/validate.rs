use std::collections::HashMap;

use crate::error::ValidationError;
use crate::options::{Category, OptionTag, Token};

/// Check the cross-option rules and return the typed tags in input order.
///
/// Rules, checked in this order:
/// 1. every token names a known option
/// 2. at most one token per category, except exactly `/D` + `/DM` when
///    no other category repeats
/// 3. `/LQ`, `/NY` and `/T` only when they are the sole token
/// 4. `/DM` needs `/D`
pub fn validate(tokens: &[Token]) -> Result<Vec<OptionTag>, ValidationError> {
    let tags = tokens
        .iter()
        .map(|token| match token {
            Token::Tag(tag) => Ok(*tag),
            Token::Unknown(raw) => Err(ValidationError::UnknownOption(raw.clone())),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut counts: HashMap<Category, usize> = HashMap::new();
    for category in tags.iter().filter_map(|tag| tag.category()) {
        *counts.entry(category).or_default() += 1;
    }
    let count = |category: Category| counts.get(&category).copied().unwrap_or(0);

    let has_day = tags.contains(&OptionTag::Day);
    let has_day_month = tags.contains(&OptionTag::DayMonth);

    if counts.values().any(|&n| n > 1) {
        let day_pair = count(Category::Day) == 2 && has_day && has_day_month;
        let others_single = [Category::Month, Category::Quarter, Category::Year]
            .into_iter()
            .all(|category| count(category) <= 1);

        if !(day_pair && others_single) {
            return Err(ValidationError::DuplicateCategory);
        }
    }

    if tags.len() > 1 {
        if let Some(solo) = tags.iter().find(|tag| tag.is_solo()) {
            return Err(ValidationError::MustBeAlone(solo.to_string()));
        }
    }

    if has_day_month && !has_day {
        return Err(ValidationError::DayMonthWithoutDay);
    }

    Ok(tags)
}
