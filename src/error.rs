use thiserror::Error;

/// getDate error types
#[derive(Error, Debug)]
pub enum GetDateError {
    #[error("{0}")]
    Store(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Rejections raised while checking the option tokens of one invocation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown option {0}")]
    UnknownOption(String),

    #[error("only one option per date type is allowed")]
    DuplicateCategory,

    #[error("{0} must be used by itself")]
    MustBeAlone(String),

    #[error("/DM only works with /D")]
    DayMonthWithoutDay,
}

/// Result type for getDate operations
pub type Result<T> = std::result::Result<T, GetDateError>;
