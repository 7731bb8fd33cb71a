//! Regex-based rewriting without a parser.
//!
//! The fast path recognizes two textual forms:
//! - `className="..."`, `className='...'` and the compiled form
//!   `className: "..."`
//! - every quoted string inside a `classnames(...)` call
//!
//! It cannot tell code from data: a quoted string inside a join call is
//! prefixed even when it is an object key or the operand of a comparison, and
//! dynamic values such as conditionals are not recognized at all. Use the
//! structural transform when correctness matters.

use crate::SupportError;
use classname_transformer::{prefix_classes, AuditSink, PrefixConfig, PrefixRule, RewriteEvent};
use regex::{Captures, Regex};

/// The output of a fast-path rewrite.
#[derive(Debug, Clone)]
pub struct FastPathResult {
    /// The rewritten source.
    pub code: String,
    /// One event per rewritten string.
    pub events: Vec<RewriteEvent>,
}

/// A compiled regex rewrite for one configuration.
#[derive(Debug, Clone)]
pub struct FastPath {
    rule: PrefixRule,
    enable_debugging: bool,
    attribute_name: String,
    attribute: Regex,
    join_call: Regex,
    quoted: Regex,
}

impl FastPath {
    /// Compiles the patterns for `config`.
    pub fn new(config: &PrefixConfig) -> Result<Self, SupportError> {
        config.validate()?;

        let attribute = format!(
            r#"\b{}(?P<sep>\s*[:=]\s*)(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)')"#,
            regex::escape(&config.attribute_name)
        );
        let join_call = format!(r"\b{}\((?P<args>[^)]+)\)", regex::escape(&config.join_call_name));

        Ok(Self {
            rule: config.rule(),
            enable_debugging: config.enable_debugging,
            attribute_name: config.attribute_name.clone(),
            attribute: compile(&attribute)?,
            join_call: compile(&join_call)?,
            quoted: compile(r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'"#)?,
        })
    }

    /// Rewrites `source`. An empty prefix leaves it unchanged.
    pub fn transform(&self, source: &str) -> FastPathResult {
        if self.rule.prefix.is_empty() {
            return FastPathResult {
                code: source.to_string(),
                events: Vec::new(),
            };
        }

        let mut events = Vec::new();
        let code = self.rewrite_join_calls(source, &mut events);
        let code = self.rewrite_attributes(&code, &mut events);

        tracing::debug!(rewritten = events.len(), "fast path rewrite");
        FastPathResult { code, events }
    }

    /// Like [`FastPath::transform`], reporting each rewrite to `sink` when
    /// debugging is enabled.
    pub fn transform_with_sink(&self, source: &str, sink: &dyn AuditSink) -> FastPathResult {
        let result = self.transform(source);
        if self.enable_debugging {
            for event in &result.events {
                sink.record(event);
            }
        }
        result
    }

    /// Prefixes the quoted strings inside each join call. Replacement is
    /// confined to the call's own text.
    fn rewrite_join_calls(&self, source: &str, events: &mut Vec<RewriteEvent>) -> String {
        self.join_call
            .replace_all(source, |caps: &Captures| {
                let whole = &caps[0];
                let args = &caps["args"];
                let args_offset = whole.len() - args.len() - 1;
                let line = line_of(source, caps.get(0).map_or(0, |m| m.start()));

                let rewritten = self.quoted.replace_all(args, |quoted: &Captures| {
                    let literal = &quoted[0];
                    let quote = &literal[..1];
                    let inner = &literal[1..literal.len() - 1];
                    let updated = prefix_classes(inner, &self.rule);
                    events.push(RewriteEvent {
                        original: inner.to_string(),
                        updated: updated.clone(),
                        line,
                    });
                    format!("{quote}{updated}{quote}")
                });

                format!("{}{})", &whole[..args_offset], rewritten)
            })
            .into_owned()
    }

    fn rewrite_attributes(&self, source: &str, events: &mut Vec<RewriteEvent>) -> String {
        self.attribute
            .replace_all(source, |caps: &Captures| {
                let (quote, inner) = match (caps.name("dq"), caps.name("sq")) {
                    (Some(m), _) => ('"', m.as_str()),
                    (None, Some(m)) => ('\'', m.as_str()),
                    (None, None) => ('"', ""),
                };
                let updated = prefix_classes(inner, &self.rule);
                events.push(RewriteEvent {
                    original: inner.to_string(),
                    updated: updated.clone(),
                    line: line_of(source, caps.get(0).map_or(0, |m| m.start())),
                });
                format!("{}{}{quote}{updated}{quote}", self.attribute_name, &caps["sep"])
            })
            .into_owned()
    }
}

fn compile(pattern: &str) -> Result<Regex, SupportError> {
    Regex::new(pattern).map_err(|source| SupportError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Returns the 1-indexed line containing byte `offset`.
fn line_of(source: &str, offset: usize) -> usize {
    source[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}
