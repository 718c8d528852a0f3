use serde::Deserialize;

/// getDate configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Store limits
    pub limits: Limits,
}

/// Limits applied by the entry store
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum number of entries read from or written to the store
    pub max_entries: usize,

    /// Keys longer than this are cut at a character boundary
    pub max_key_bytes: usize,

    /// Values longer than this are cut at a character boundary
    pub max_value_bytes: usize,

    /// What an upsert of a new key does once the store is full
    pub on_full: OverflowPolicy,
}

/// Behaviour when a new key arrives at a full store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Skip the write without reporting an error
    #[default]
    Drop,
    /// Fail the invocation
    Reject,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_entries: 512,
            max_key_bytes: 127,
            max_value_bytes: 255,
            on_full: OverflowPolicy::Drop,
        }
    }
}
