//! Class names that downstream processing should leave alone.

use std::collections::HashSet;

use crate::SupportError;
use classname_transformer::RewriteEvent;
use regex::Regex;

/// One user-supplied exemption rule.
#[derive(Debug, Clone)]
pub enum IgnoreMatcher {
    /// Matches a class name equal to the string.
    Exact(String),
    /// Matches a class name the regex finds a match in.
    Pattern(Regex),
}

impl IgnoreMatcher {
    /// Returns true if `class_name` matches this rule.
    pub fn matches(&self, class_name: &str) -> bool {
        match self {
            Self::Exact(name) => name == class_name,
            Self::Pattern(re) => re.is_match(class_name),
        }
    }
}

/// A predicate over class names.
///
/// A name is ignored when any of the following holds:
/// - a configured [`IgnoreMatcher`] matches it
/// - it is empty or whitespace only
/// - it starts with an ASCII uppercase letter or `-`
/// - it was produced by an earlier rewrite (see [`IgnoreList::with_rewritten`])
#[derive(Debug, Clone, Default)]
pub struct IgnoreList {
    matchers: Vec<IgnoreMatcher>,
    rewritten: HashSet<String>,
}

impl IgnoreList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an exact-match rule.
    pub fn exact(mut self, name: impl Into<String>) -> Self {
        self.matchers.push(IgnoreMatcher::Exact(name.into()));
        self
    }

    /// Adds a regex rule.
    pub fn pattern(mut self, pattern: &str) -> Result<Self, SupportError> {
        let re = Regex::new(pattern).map_err(|source| SupportError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        self.matchers.push(IgnoreMatcher::Pattern(re));
        Ok(self)
    }

    /// Builds a list from textual rules. A rule wrapped in slashes
    /// (`/^icon-/`) is a regex; anything else is an exact name.
    pub fn from_specs<I, S>(specs: I) -> Result<Self, SupportError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        specs.into_iter().try_fold(Self::new(), |list, spec| {
            let spec = spec.as_ref();
            match spec
                .strip_prefix('/')
                .and_then(|rest| rest.strip_suffix('/'))
            {
                Some(pattern) if !pattern.is_empty() => list.pattern(pattern),
                _ => Ok(list.exact(spec)),
            }
        })
    }

    /// Exempts every value produced by `events`: each full updated string
    /// and each of its tokens.
    pub fn with_rewritten(mut self, events: &[RewriteEvent]) -> Self {
        for event in events {
            self.rewritten.insert(event.updated.clone());
            self.rewritten
                .extend(event.updated.split_whitespace().map(str::to_string));
        }
        self
    }

    /// Returns true if a configured rule matches the trimmed name.
    pub fn matches(&self, class_name: &str) -> bool {
        let name = class_name.trim();
        self.matchers.iter().any(|m| m.matches(name))
    }

    /// Returns true if `class_name` should be exempt from processing.
    pub fn should_ignore(&self, class_name: &str) -> bool {
        if self.matches(class_name) {
            return true;
        }
        let trimmed = class_name.trim();
        if trimmed.is_empty() {
            return true;
        }
        if class_name.starts_with(|c: char| c.is_ascii_uppercase() || c == '-') {
            return true;
        }
        self.rewritten.contains(class_name)
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty() && self.rewritten.is_empty()
    }
}
