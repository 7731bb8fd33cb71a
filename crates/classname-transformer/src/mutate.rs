//! In-place rewriting of classified values.

use crate::audit::RewriteEvent;
use crate::config::PrefixRule;
use crate::emit::Edit;
use crate::prefixer::prefix_classes;
use crate::shape::{ClassExpr, ClassLiteral, ClassValue, LiteralKind, OpaqueShape};
use crate::transform::SkippedShape;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Rewrites class values and records one edit per rewritten literal.
pub(crate) struct Mutator<'a> {
    rule: &'a PrefixRule,
    /// Edits keyed by start offset; a literal is written at most once.
    edits: BTreeMap<usize, Edit>,
    events: Vec<RewriteEvent>,
    skipped: Vec<SkippedShape>,
}

impl<'a> Mutator<'a> {
    pub fn new(rule: &'a PrefixRule) -> Self {
        Self {
            rule,
            edits: BTreeMap::new(),
            events: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn rewrite_value(&mut self, value: &mut ClassValue) {
        match value {
            ClassValue::Literal(literal) => {
                let updated = prefix_classes(&literal.text, self.rule);
                self.write(literal, updated);
            }
            ClassValue::ExpressionSlot(expr) => self.rewrite(expr),
        }
    }

    pub fn rewrite(&mut self, expr: &mut ClassExpr) {
        match expr {
            ClassExpr::Literal(literal) => {
                let updated = prefix_classes(&literal.text, self.rule);
                self.write(literal, updated);
            }
            ClassExpr::Conditional {
                consequent,
                alternate,
            } => {
                self.rewrite(consequent);
                self.rewrite(alternate);
            }
            ClassExpr::Template { quasis, exprs } => {
                let last = quasis.len().saturating_sub(1);
                for (idx, quasi) in quasis.iter_mut().enumerate() {
                    let updated = prefix_segment(&quasi.text, self.rule, idx > 0, idx < last);
                    self.write(quasi, updated);
                }
                for expr in exprs {
                    self.rewrite(expr);
                }
            }
            ClassExpr::JoinCall { args, .. } => {
                for arg in args {
                    self.rewrite(arg);
                }
            }
            ClassExpr::Opaque(shape) => self.skip(shape),
        }
    }

    fn write(&mut self, literal: &mut ClassLiteral, updated: String) {
        if literal.text.is_empty() || literal.text == updated {
            return;
        }
        let Entry::Vacant(slot) = self.edits.entry(literal.span.start) else {
            return;
        };

        slot.insert(Edit {
            range: literal.span.clone(),
            replacement: render(literal.kind, &updated),
        });
        let original = std::mem::replace(&mut literal.text, updated.clone());
        tracing::debug!(line = literal.line, %original, %updated, "rewrote class list");
        self.events.push(RewriteEvent {
            original,
            updated,
            line: literal.line,
        });
    }

    fn skip(&mut self, shape: &OpaqueShape) {
        tracing::debug!(line = shape.line, kind = shape.kind, "left class value unchanged");
        self.skipped.push(SkippedShape {
            kind: shape.kind,
            line: shape.line,
        });
    }

    pub fn finish(self) -> (Vec<Edit>, Vec<RewriteEvent>, Vec<SkippedShape>) {
        (self.edits.into_values().collect(), self.events, self.skipped)
    }
}

/// Prefixes a template segment.
///
/// Whitespace that separates the segment from a neighbouring interpolation is
/// kept as a single space so the interpolated classes stay separate tokens.
fn prefix_segment(text: &str, rule: &PrefixRule, after_expr: bool, before_expr: bool) -> String {
    let prefixed = prefix_classes(text, rule);
    if prefixed.is_empty() {
        return if (after_expr || before_expr) && !text.is_empty() {
            " ".to_string()
        } else {
            prefixed
        };
    }

    let lead = after_expr && text.starts_with(char::is_whitespace);
    let trail = before_expr && text.ends_with(char::is_whitespace);
    let mut out = String::with_capacity(prefixed.len() + 2);
    if lead {
        out.push(' ');
    }
    out.push_str(&prefixed);
    if trail {
        out.push(' ');
    }
    out
}

/// Renders a rewritten literal as source text.
fn render(kind: LiteralKind, text: &str) -> String {
    match kind {
        LiteralKind::JsxAttribute { quote } => format!("{quote}{text}{quote}"),
        LiteralKind::String { quote } => {
            let mut out = String::with_capacity(text.len() + 2);
            out.push(quote);
            for c in text.chars() {
                match c {
                    '\\' => out.push_str("\\\\"),
                    '\n' => out.push_str("\\n"),
                    '\r' => out.push_str("\\r"),
                    '\u{2028}' => out.push_str("\\u2028"),
                    '\u{2029}' => out.push_str("\\u2029"),
                    c if c == quote => {
                        out.push('\\');
                        out.push(c);
                    }
                    c if c < ' ' || c == '\u{7f}' => {
                        out.push_str(&format!("\\x{:02x}", c as u32));
                    }
                    c => out.push(c),
                }
            }
            out.push(quote);
            out
        }
        LiteralKind::TemplateSegment => text.to_string(),
    }
}
