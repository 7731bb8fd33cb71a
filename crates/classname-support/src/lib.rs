//! Helpers around the structural className transform.
//!
//! This crate provides:
//! - [`FastPath`]: a regex-based rewrite that skips parsing entirely
//! - [`IgnoreList`]: a predicate for class names that downstream tools should
//!   leave alone, including names produced by a previous rewrite
//!
//! # Example
//!
//! ```
//! use classname_support::{FastPath, IgnoreList};
//! use classname_transformer::PrefixConfig;
//!
//! let fast = FastPath::new(&PrefixConfig::default()).unwrap();
//! let result = fast.transform(r#"<div className="btn" />"#);
//! assert_eq!(result.code, r#"<div className="app-btn" />"#);
//!
//! let ignore = IgnoreList::new().with_rewritten(&result.events);
//! assert!(ignore.should_ignore("app-btn"));
//! assert!(!ignore.should_ignore("btn"));
//! ```

mod error;
mod fast_path;
mod ignore;

pub use error::SupportError;
pub use fast_path::{FastPath, FastPathResult};
pub use ignore::{IgnoreList, IgnoreMatcher};
