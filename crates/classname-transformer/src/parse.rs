//! Source parsing through SWC.

use crate::error::TransformError;
use std::ops::Range;
use swc_common::{sync::Lrc, BytePos, FileName, SourceMap, Span, Spanned};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

/// The grammar a source file is parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceSyntax {
    /// ECMAScript with JSX (`.js`, `.jsx`, `.mjs`, `.cjs`).
    Jsx,
    /// TypeScript without JSX (`.ts`, `.mts`, `.cts`).
    Typescript,
    /// TypeScript with JSX (`.tsx`, and anything unrecognized).
    #[default]
    Tsx,
}

impl SourceSyntax {
    /// Picks the grammar from a filename's extension.
    pub fn from_filename(filename: Option<&str>) -> Self {
        let Some(filename) = filename else {
            return Self::default();
        };
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        match extension {
            "js" | "jsx" | "mjs" | "cjs" => Self::Jsx,
            "ts" | "mts" | "cts" => Self::Typescript,
            _ => Self::Tsx,
        }
    }

    fn to_swc(self) -> Syntax {
        match self {
            Self::Jsx => Syntax::Es(EsSyntax {
                jsx: true,
                decorators: true,
                ..Default::default()
            }),
            Self::Typescript => Syntax::Typescript(TsSyntax {
                tsx: false,
                decorators: true,
                ..Default::default()
            }),
            Self::Tsx => Syntax::Typescript(TsSyntax {
                tsx: true,
                decorators: true,
                ..Default::default()
            }),
        }
    }
}

/// A parsed module together with the text it was parsed from.
pub(crate) struct ParsedSource<'a> {
    pub module: Module,
    pub source: &'a str,
    cm: Lrc<SourceMap>,
    start: BytePos,
}

impl<'a> ParsedSource<'a> {
    /// Converts an SWC span into a byte range of `source`.
    ///
    /// Returns `None` for dummy spans or spans outside the file.
    pub fn range(&self, span: Span) -> Option<Range<usize>> {
        if span.is_dummy() || span.lo < self.start || span.hi < span.lo {
            return None;
        }
        let start = (span.lo.0 - self.start.0) as usize;
        let end = (span.hi.0 - self.start.0) as usize;
        if end > self.source.len() {
            return None;
        }
        Some(start..end)
    }

    /// Returns the source text covered by an SWC span.
    pub fn text(&self, span: Span) -> Option<&'a str> {
        let range = self.range(span)?;
        self.source.get(range)
    }

    /// Returns the 1-indexed line of a position.
    pub fn line(&self, pos: BytePos) -> usize {
        if pos < self.start {
            return 0;
        }
        self.cm.lookup_char_pos(pos).line
    }
}

/// Parses `source` as a module.
///
/// Errors the parser recovered from are treated as fatal as well, so a
/// malformed file never produces output.
pub(crate) fn parse_source<'a>(
    source: &'a str,
    syntax: SourceSyntax,
    filename: Option<&str>,
) -> Result<ParsedSource<'a>, TransformError> {
    let cm: Lrc<SourceMap> = Default::default();
    let name = filename.unwrap_or("classname-source");
    let fm = cm.new_source_file(
        FileName::Custom(name.to_string()).into(),
        source.to_string(),
    );

    let mut parser = Parser::new(syntax.to_swc(), StringInput::from(&*fm), None);
    let module = parser
        .parse_module()
        .map_err(|e| parse_error(&cm, fm.start_pos, e))?;

    if let Some(error) = parser.take_errors().into_iter().next() {
        return Err(parse_error(&cm, fm.start_pos, error));
    }

    Ok(ParsedSource {
        module,
        source,
        start: fm.start_pos,
        cm,
    })
}

fn parse_error(
    cm: &SourceMap,
    start: BytePos,
    error: swc_ecma_parser::error::Error,
) -> TransformError {
    let span = error.span();
    let message = error.kind().msg().into_owned();

    if span.is_dummy() || span.lo < start {
        return TransformError::Parse {
            message,
            line: 0,
            column: 0,
        };
    }

    let loc = cm.lookup_char_pos(span.lo);
    TransformError::Parse {
        message,
        line: loc.line,
        column: loc.col.0 + 1,
    }
}
