/// One persisted `key=value` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

/// What an upsert did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// Existing key, value replaced in place
    Updated,
    /// New key appended at the end
    Inserted,
    /// New key skipped because the store is full
    Dropped,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parse one store line; the first `=` separates key from value.
    ///
    /// Returns `None` for lines without `=`. Trailing CR/LF is stripped
    /// from the value.
    pub fn parse_line(line: &str) -> Option<Self> {
        let (key, value) = line.split_once('=')?;
        let value = value.trim_end_matches(['\n', '\r']);
        Some(Self::new(key, value))
    }

    /// Render as a store line without the trailing newline
    pub fn to_line(&self) -> String {
        format!("{}={}", self.key, self.value)
    }
}

/// Cut `s` to at most `max` bytes without splitting a character
pub fn truncate_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
