//! Error types.

use thiserror::Error;

/// An error building a fast path or an ignore list.
#[derive(Debug, Error)]
pub enum SupportError {
    /// An ignore pattern is not a valid regular expression.
    #[error("invalid ignore pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// The regex compiler's error.
        #[source]
        source: regex::Error,
    },

    /// The loader options were rejected.
    #[error(transparent)]
    Config(#[from] classname_transformer::ConfigError),
}
