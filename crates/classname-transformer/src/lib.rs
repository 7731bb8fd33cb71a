//! Structural className prefixing for JSX/TSX sources.
//!
//! This crate rewrites the class-name literals of JSX `className` attributes so
//! that every class token carries a namespace prefix. It handles:
//! - Plain string attributes (`className="btn primary"`)
//! - Conditional expressions, template literals and `classnames(...)` calls,
//!   nested in any combination
//! - Byte-for-byte preservation of everything outside the rewritten literals
//! - Optional audit logging of every rewrite through an [`AuditSink`]
//!
//! # Example
//!
//! ```
//! use classname_transformer::{transform, PrefixConfig, TransformOptions};
//!
//! let source = r#"const Button = () => <button className="btn primary">Go</button>;"#;
//!
//! let result = transform(source, &PrefixConfig::default(), &TransformOptions::default())
//!     .expect("valid source");
//! assert_eq!(
//!     result.code,
//!     r#"const Button = () => <button className="app-btn app-primary">Go</button>;"#
//! );
//! ```

mod audit;
mod config;
mod emit;
mod error;
mod locate;
mod mutate;
mod parse;
mod prefixer;
mod query;
mod shape;
mod transform;

pub use audit::{AuditSink, FileSink, MemorySink, NoopSink, RewriteEvent};
pub use config::{PrefixConfig, PrefixRule};
pub use emit::Edit;
pub use error::{ConfigError, TransformError};
pub use parse::SourceSyntax;
pub use prefixer::prefix_classes;
pub use query::query_param;
pub use shape::{ClassExpr, ClassLiteral, ClassValue, LiteralKind, OpaqueShape};
pub use transform::{
    transform, transform_with_sink, SkippedShape, TransformOptions, TransformResult,
};
