//! Class-value shapes and their classification.
//!
//! An attribute value is lowered from the SWC tree into a small closed
//! grammar before it is rewritten. Every shape the rewriter understands has a
//! variant; everything else becomes [`ClassExpr::Opaque`] and is left alone.
//! Shapes nest freely: a template interpolation may hold a conditional, a
//! conditional branch may hold a join call, and so on.

use crate::parse::ParsedSource;
use std::ops::Range;
use swc_common::{Span, Spanned};
use swc_ecma_ast::{CallExpr, Callee, Expr, JSXAttrValue, JSXExpr, Lit, Str, Tpl};

/// How a literal is written in the source, which decides how it is re-emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    /// A quoted JSX attribute value: `className="btn"`.
    JsxAttribute { quote: char },
    /// A JavaScript string literal: `"btn"` or `'btn'`.
    String { quote: char },
    /// A static segment of a template literal.
    TemplateSegment,
}

/// A class-name literal located in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassLiteral {
    pub kind: LiteralKind,
    /// Byte range in the source, quotes included for strings.
    pub span: Range<usize>,
    /// The class list; rewritten in place.
    pub text: String,
    /// 1-indexed line of the literal.
    pub line: usize,
}

/// A value shape the rewriter does not interpret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueShape {
    /// A short description such as `"identifier"` or `"object literal"`.
    pub kind: &'static str,
    /// 1-indexed line of the expression.
    pub line: usize,
}

/// A class-name expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassExpr {
    Literal(ClassLiteral),
    /// A ternary; its test is never inspected.
    Conditional {
        consequent: Box<ClassExpr>,
        alternate: Box<ClassExpr>,
    },
    /// A template literal. `quasis.len() == exprs.len() + 1`.
    Template {
        quasis: Vec<ClassLiteral>,
        exprs: Vec<ClassExpr>,
    },
    /// A call to the configured class-list join helper.
    JoinCall { callee: String, args: Vec<ClassExpr> },
    Opaque(OpaqueShape),
}

/// The value of a class-name attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassValue {
    /// `className="..."`
    Literal(ClassLiteral),
    /// `className={...}`
    ExpressionSlot(ClassExpr),
}

/// Lowers SWC nodes into [`ClassExpr`] trees.
pub(crate) struct Classifier<'a> {
    parsed: &'a ParsedSource<'a>,
    join_call_name: &'a str,
}

impl<'a> Classifier<'a> {
    pub fn new(parsed: &'a ParsedSource<'a>, join_call_name: &'a str) -> Self {
        Self {
            parsed,
            join_call_name,
        }
    }

    /// Classifies an attribute value.
    pub fn classify_value(&self, value: &JSXAttrValue) -> ClassValue {
        match value {
            JSXAttrValue::JSXExprContainer(container) => match &container.expr {
                JSXExpr::Expr(expr) => ClassValue::ExpressionSlot(self.classify(expr)),
                JSXExpr::JSXEmptyExpr(empty) => {
                    ClassValue::ExpressionSlot(self.opaque("empty expression", empty.span))
                }
            },
            other => match self.attribute_literal(other.span()) {
                Some(literal) => ClassValue::Literal(literal),
                None => ClassValue::ExpressionSlot(self.opaque("element value", other.span())),
            },
        }
    }

    /// Classifies an expression, recursing into every shape that can carry
    /// class names.
    pub fn classify(&self, expr: &Expr) -> ClassExpr {
        match expr {
            Expr::Paren(paren) => self.classify(&paren.expr),
            Expr::Lit(Lit::Str(s)) => match s.value.as_str() {
                Some(value) => match self.string_literal(s, value) {
                    Some(literal) => ClassExpr::Literal(literal),
                    None => self.opaque("string literal", s.span),
                },
                // Lone surrogates have no UTF-8 form to re-emit.
                None => self.opaque("non-UTF-8 string literal", s.span),
            },
            Expr::Cond(cond) => ClassExpr::Conditional {
                consequent: Box::new(self.classify(&cond.cons)),
                alternate: Box::new(self.classify(&cond.alt)),
            },
            Expr::Tpl(tpl) => self.template(tpl),
            Expr::Call(call) if self.is_join_call(call) => ClassExpr::JoinCall {
                callee: self.join_call_name.to_string(),
                args: call
                    .args
                    .iter()
                    .map(|arg| match arg.spread {
                        Some(spread) => self.opaque("spread argument", spread),
                        None => self.classify(&arg.expr),
                    })
                    .collect(),
            },
            other => self.opaque(shape_label(other), other.span()),
        }
    }

    fn is_join_call(&self, call: &CallExpr) -> bool {
        let Callee::Expr(callee) = &call.callee else {
            return false;
        };
        matches!(callee.as_ref(), Expr::Ident(ident) if &*ident.sym == self.join_call_name)
    }

    fn template(&self, tpl: &Tpl) -> ClassExpr {
        // Segments are tokenized on their raw text, which an escape such as
        // `\n` would desynchronize from the runtime value.
        if tpl.quasis.iter().any(|quasi| quasi.raw.contains('\\')) {
            return self.opaque("escaped template literal", tpl.span);
        }

        let mut quasis = Vec::with_capacity(tpl.quasis.len());
        for (idx, quasi) in tpl.quasis.iter().enumerate() {
            let Some(span) = self.segment_range(tpl, idx) else {
                return self.opaque("template literal", tpl.span);
            };
            quasis.push(ClassLiteral {
                kind: LiteralKind::TemplateSegment,
                span,
                text: quasi.raw.to_string(),
                line: self.parsed.line(quasi.span.lo),
            });
        }

        if quasis.len() != tpl.exprs.len() + 1 {
            return self.opaque("template literal", tpl.span);
        }

        ClassExpr::Template {
            quasis,
            exprs: tpl.exprs.iter().map(|expr| self.classify(expr)).collect(),
        }
    }

    /// Finds the byte range of the raw text of template segment `idx`.
    ///
    /// Uses the segment's own span when it covers exactly the raw text;
    /// otherwise the segment is located after the opening backtick or after
    /// the `}` closing the previous interpolation.
    fn segment_range(&self, tpl: &Tpl, idx: usize) -> Option<Range<usize>> {
        let quasi = &tpl.quasis[idx];
        let raw: &str = &quasi.raw;

        if let Some(range) = self.parsed.range(quasi.span) {
            if self.parsed.source.get(range.clone()) == Some(raw) {
                return Some(range);
            }
        }

        let start = if idx == 0 {
            self.parsed.range(tpl.span)?.start + 1
        } else {
            let prev = self.parsed.range(tpl.exprs.get(idx - 1)?.span())?;
            let rest = self.parsed.source.get(prev.end..)?;
            prev.end + rest.find('}')? + 1
        };
        let range = start..start + raw.len();
        (self.parsed.source.get(range.clone()) == Some(raw)).then_some(range)
    }

    fn string_literal(&self, s: &Str, value: &str) -> Option<ClassLiteral> {
        let quote = quote_of(self.parsed.text(s.span)?)?;
        Some(ClassLiteral {
            kind: LiteralKind::String { quote },
            span: self.parsed.range(s.span)?,
            text: value.to_string(),
            line: self.parsed.line(s.span.lo),
        })
    }

    /// A quoted attribute value carries no escapes, so its text is the raw
    /// source between the quotes.
    fn attribute_literal(&self, span: Span) -> Option<ClassLiteral> {
        let raw = self.parsed.text(span)?;
        let quote = quote_of(raw)?;
        Some(ClassLiteral {
            kind: LiteralKind::JsxAttribute { quote },
            text: raw[1..raw.len() - 1].to_string(),
            span: self.parsed.range(span)?,
            line: self.parsed.line(span.lo),
        })
    }

    fn opaque(&self, kind: &'static str, span: Span) -> ClassExpr {
        ClassExpr::Opaque(OpaqueShape {
            kind,
            line: self.parsed.line(span.lo),
        })
    }
}

/// Returns the quote character of a quoted literal's raw text.
fn quote_of(raw: &str) -> Option<char> {
    let quote = raw.chars().next()?;
    let closed = raw.len() >= 2 && raw.ends_with(quote);
    (matches!(quote, '"' | '\'') && closed).then_some(quote)
}

fn shape_label(expr: &Expr) -> &'static str {
    match expr {
        Expr::Ident(_) => "identifier",
        Expr::Member(_) | Expr::OptChain(_) => "member expression",
        Expr::Call(_) => "call expression",
        Expr::Object(_) => "object literal",
        Expr::Array(_) => "array literal",
        Expr::Bin(_) => "binary expression",
        Expr::Lit(_) => "non-string literal",
        Expr::TaggedTpl(_) => "tagged template",
        Expr::Arrow(_) | Expr::Fn(_) => "function",
        _ => "expression",
    }
}
