//! Error types.

use thiserror::Error;

/// An error that aborts a transform. No output is produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The source is not valid under the selected grammar.
    #[error("parse error at {line}:{column}: {message}")]
    Parse {
        /// The parser's message.
        message: String,
        /// 1-indexed line number, or 0 when the parser gave no position.
        line: usize,
        /// 1-indexed column number, or 0 when the parser gave no position.
        column: usize,
    },

    /// The configuration was rejected before parsing.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// An invalid loader option.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The options object could not be deserialized.
    #[error("invalid loader options: {0}")]
    InvalidOptions(String),

    /// The prefix contains whitespace or a quoting character.
    #[error("invalid prefix {0:?}: prefixes must not contain whitespace, quotes, `\\`, `$` or braces")]
    InvalidPrefix(String),

    /// A required name option is empty.
    #[error("`{0}` must not be empty")]
    EmptyName(&'static str),

    /// A resource query parameter has an unusable value.
    #[error("invalid value {value:?} for query parameter `{name}`")]
    InvalidQueryValue {
        /// The parameter name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
}
