use std::fmt;

/// Canonical slash options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionTag {
    /// `/D` day of month
    Day,
    /// `/DM` month as two digits, paired with `/D`
    DayMonth,
    /// `/LM` previous month name
    LastMonth,
    /// `/LQ` previous quarter
    LastQuarter,
    /// `/LY` previous year
    LastYear,
    /// `/M` month name
    Month,
    /// `/NY` next year
    NextYear,
    /// `/Q` quarter or season
    Quarter,
    /// `/T` terminal date
    Terminal,
    /// `/Y` year
    Year,
}

/// Grouping used by the one-per-category rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Day,
    Month,
    Quarter,
    Year,
}

/// One normalized token from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Tag(OptionTag),
    /// Slash-prefixed text that names no option
    Unknown(String),
}

impl OptionTag {
    pub const ALL: [OptionTag; 10] = [
        OptionTag::Day,
        OptionTag::DayMonth,
        OptionTag::LastMonth,
        OptionTag::LastQuarter,
        OptionTag::LastYear,
        OptionTag::Month,
        OptionTag::NextYear,
        OptionTag::Quarter,
        OptionTag::Terminal,
        OptionTag::Year,
    ];

    /// Look up a tag by its exact, case-sensitive spelling
    pub fn from_str_exact(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == s)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptionTag::Day => "/D",
            OptionTag::DayMonth => "/DM",
            OptionTag::LastMonth => "/LM",
            OptionTag::LastQuarter => "/LQ",
            OptionTag::LastYear => "/LY",
            OptionTag::Month => "/M",
            OptionTag::NextYear => "/NY",
            OptionTag::Quarter => "/Q",
            OptionTag::Terminal => "/T",
            OptionTag::Year => "/Y",
        }
    }

    /// Category counted for exclusivity; `/T` belongs to none
    pub fn category(self) -> Option<Category> {
        match self {
            OptionTag::Day | OptionTag::DayMonth => Some(Category::Day),
            OptionTag::Month | OptionTag::LastMonth => Some(Category::Month),
            OptionTag::Quarter | OptionTag::LastQuarter => Some(Category::Quarter),
            OptionTag::Year | OptionTag::LastYear | OptionTag::NextYear => Some(Category::Year),
            OptionTag::Terminal => None,
        }
    }

    /// Options that must be the only token of an invocation
    pub fn is_solo(self) -> bool {
        matches!(
            self,
            OptionTag::LastQuarter | OptionTag::NextYear | OptionTag::Terminal
        )
    }

    /// Store key written by this option; `/T` is never persisted
    pub fn store_key(self) -> Option<&'static str> {
        match self {
            OptionTag::Day => Some("_theTwoDigitDate"),
            OptionTag::DayMonth | OptionTag::Month => Some("_theMonth"),
            OptionTag::LastMonth => Some("_lastMonth"),
            OptionTag::LastQuarter | OptionTag::Quarter => Some("_theQuarter"),
            OptionTag::LastYear | OptionTag::NextYear | OptionTag::Year => Some("_theYear"),
            OptionTag::Terminal => None,
        }
    }
}

impl fmt::Display for OptionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Token {
    /// Classify one already-split slash token
    pub fn classify(raw: &str) -> Self {
        match OptionTag::from_str_exact(raw) {
            Some(tag) => Token::Tag(tag),
            None => Token::Unknown(raw.to_string()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Tag(tag) => tag.fmt(f),
            Token::Unknown(raw) => f.write_str(raw),
        }
    }
}
