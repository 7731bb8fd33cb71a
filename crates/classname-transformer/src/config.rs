//! Loader options.

use crate::error::ConfigError;
use crate::query::query_param;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Characters that would break out of the literal a prefix is spliced into.
const FORBIDDEN_PREFIX_CHARS: &[char] = &['"', '\'', '`', '\\', '$', '{', '}'];

/// Options recognized by the transform, as passed by a bundler.
///
/// Deserializes from the loader's JSON options object:
///
/// ```json
/// { "prefix": "ui", "enableDebugging": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PrefixConfig {
    /// Namespace prepended to every class token.
    pub prefix: String,
    /// Whether rewrites are reported to the audit sink.
    pub enable_debugging: bool,
    /// JSX attribute whose value holds class names.
    pub attribute_name: String,
    /// Identifier of the class-list join helper.
    pub join_call_name: String,
}

impl Default for PrefixConfig {
    fn default() -> Self {
        Self {
            prefix: "app".to_string(),
            enable_debugging: false,
            attribute_name: "className".to_string(),
            join_call_name: "classnames".to_string(),
        }
    }
}

impl PrefixConfig {
    /// Creates a default configuration with the given prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Default::default()
        }
    }

    /// Parses and validates loader options from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::InvalidOptions(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Applies overrides from a loader resource query such as
    /// `?prefix=ui&enableDebugging`.
    pub fn apply_query(mut self, query: &str) -> Result<Self, ConfigError> {
        if let Some(prefix) = query_param("prefix", query) {
            self.prefix = prefix;
        }
        if let Some(name) = query_param("attributeName", query) {
            self.attribute_name = name;
        }
        if let Some(name) = query_param("joinCallName", query) {
            self.join_call_name = name;
        }
        if let Some(flag) = query_param("enableDebugging", query) {
            self.enable_debugging = match flag.as_str() {
                "" | "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ConfigError::InvalidQueryValue {
                        name: "enableDebugging",
                        value: flag,
                    })
                }
            };
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks that the options can be spliced into source text safely.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self
            .prefix
            .chars()
            .any(|c| c.is_whitespace() || FORBIDDEN_PREFIX_CHARS.contains(&c))
        {
            return Err(ConfigError::InvalidPrefix(self.prefix.clone()));
        }
        if self.attribute_name.is_empty() {
            return Err(ConfigError::EmptyName("attributeName"));
        }
        if self.join_call_name.is_empty() {
            return Err(ConfigError::EmptyName("joinCallName"));
        }
        Ok(())
    }

    /// Returns the prefix rule for one transform call.
    pub fn rule(&self) -> PrefixRule {
        PrefixRule::new(&self.prefix)
    }
}

/// The prefix applied to class tokens during one transform call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRule {
    pub prefix: SmolStr,
}

impl PrefixRule {
    pub fn new(prefix: impl AsRef<str>) -> Self {
        Self {
            prefix: SmolStr::new(prefix.as_ref()),
        }
    }
}

impl Default for PrefixRule {
    fn default() -> Self {
        Self::new("app")
    }
}
