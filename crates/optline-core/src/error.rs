//! Error types for option declaration and argument parsing

use thiserror::Error;

/// Errors raised while declaring options
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("at least one of short name or long name must be specified")]
    NoName,

    #[error("help string cannot be empty")]
    EmptyHelp,

    #[error("short option name must be 1 character '{0}'")]
    ShortNameLength(String),

    #[error("long option name must be at least 2 characters '{0}'")]
    LongNameLength(String),

    #[error("duplicate short name option declared '{0}'")]
    DuplicateShort(char),

    #[error("duplicate long name option declared '{0}'")]
    DuplicateLong(String),
}

/// Errors raised while parsing an argument vector
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown option name '{0}'")]
    UnknownOption(String),

    #[error("missing option name after '{0}'")]
    MalformedOption(String),

    #[error("option '{0}' was not expecting a value")]
    UnexpectedValue(String),

    #[error("option '{0}' was expecting a value")]
    MissingValue(String),

    #[error("option '{name}' was expecting a value, cannot be combined with other options '{group}'")]
    CombinedValueOption { name: char, group: String },
}
