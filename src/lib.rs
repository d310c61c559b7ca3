//! Free-text search query parser
//!
//! Turns the kind of query string a user types into a search box into a
//! structured tree that a filtering/search backend can execute:
//!
//! - `rust cli`: bare terms
//! - `"exact phrase"` or `'exact phrase'`: quoted multi-word terms
//! - `author:john`: field-prefixed terms
//! - `15-25`, `15-`, `-25`, `year:2020-2024`: numeric ranges, open on
//!   either side, with or without a field prefix
//! - `+term`, `!term`: single-character flags from the set `+ * / ! # ~`
//! - `\(literal\)`: backslash escaping of structural characters
//! - `(a b)`: AND group, `[a b c]`: OR group, `a|b`: infix OR
//!
//! The parser is total: every input produces some valid tree. Unmatched
//! delimiters and unterminated quotes are handled tolerantly instead of
//! being rejected.
//!
//! # Example
//!
//! ```rust
//! use squint::parse;
//!
//! let ast = parse("title:rust (tag:cli|tag:tui)");
//! assert_eq!(ast.len(), 2);
//! assert_eq!(ast.nodes()[0].kind(), "prefix");
//! ```

pub mod ast;
pub mod classify;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod syntax;

pub use ast::{Flag, QueryAst, QueryNode};
pub use error::{QueryError, Result};
pub use parser::{parse, parse_opt};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
