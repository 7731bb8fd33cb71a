//! Transform entry point.

use crate::audit::{AuditSink, NoopSink, RewriteEvent};
use crate::config::PrefixConfig;
use crate::emit::{apply_edits, Edit};
use crate::error::TransformError;
use crate::locate::AttributeLocator;
use crate::parse::{parse_source, SourceSyntax};
use serde::Serialize;

/// Options describing the file being transformed.
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    /// The filename of the source file, used to pick the grammar and in
    /// parser messages.
    pub filename: Option<String>,
    /// Overrides the grammar derived from `filename`.
    pub syntax: Option<SourceSyntax>,
}

impl TransformOptions {
    /// Options for a named file.
    pub fn for_file(filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            syntax: None,
        }
    }
}

/// A class value that was left unchanged because its shape is not
/// interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedShape {
    /// A short description of the shape, e.g. `"identifier"`.
    pub kind: &'static str,
    /// 1-indexed line of the value.
    pub line: usize,
}

/// The result of a transform.
#[derive(Debug, Clone)]
pub struct TransformResult {
    /// The transformed source.
    pub code: String,
    /// The literal replacements applied to the source, in source order.
    pub edits: Vec<Edit>,
    /// One event per rewritten literal.
    pub events: Vec<RewriteEvent>,
    /// Class values that were not rewritten.
    pub skipped: Vec<SkippedShape>,
}

impl TransformResult {
    /// Returns true if the output equals the input.
    pub fn is_unchanged(&self) -> bool {
        self.edits.is_empty()
    }
}

/// Prefixes the class names of every target attribute in `source`.
///
/// The source is parsed in full first: a syntax error aborts the transform and
/// no output is produced. An empty prefix leaves the source unchanged.
pub fn transform(
    source: &str,
    config: &PrefixConfig,
    options: &TransformOptions,
) -> Result<TransformResult, TransformError> {
    transform_with_sink(source, config, options, &NoopSink)
}

/// Like [`transform`], reporting each rewrite to `sink` when
/// `config.enable_debugging` is set.
pub fn transform_with_sink(
    source: &str,
    config: &PrefixConfig,
    options: &TransformOptions,
    sink: &dyn AuditSink,
) -> Result<TransformResult, TransformError> {
    config.validate()?;

    let syntax = options
        .syntax
        .unwrap_or_else(|| SourceSyntax::from_filename(options.filename.as_deref()));
    let parsed = parse_source(source, syntax, options.filename.as_deref())?;

    if config.prefix.is_empty() {
        return Ok(TransformResult {
            code: source.to_string(),
            edits: Vec::new(),
            events: Vec::new(),
            skipped: Vec::new(),
        });
    }

    let rule = config.rule();
    let locator = AttributeLocator::new(
        &parsed,
        &rule,
        &config.attribute_name,
        &config.join_call_name,
    );
    let (edits, events, skipped) = locator.run(&parsed);
    let code = apply_edits(source, &edits);

    tracing::debug!(
        file = options.filename.as_deref().unwrap_or("<anonymous>"),
        rewritten = events.len(),
        skipped = skipped.len(),
        "transformed"
    );

    if config.enable_debugging {
        for event in &events {
            sink.record(event);
        }
    }

    Ok(TransformResult {
        code,
        edits,
        events,
        skipped,
    })
}
