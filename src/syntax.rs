//! Grammar constants for the query syntax
//!
//! The character sets here are process-wide immutable configuration. The
//! grammar is not tunable at runtime; a different delimiter set is a
//! different build, not a different configuration value.

use crate::ast::Flag;

/// Escape character; the character after it is taken verbatim
pub const ESCAPE: char = '\\';

/// Quote characters; either one opens a quoted section that runs to the
/// matching quote or to the end of input
pub const QUOTES: [char; 2] = ['"', '\''];

/// Opens an AND group
pub const AND_OPEN: char = '(';
/// Closes the innermost open group
pub const AND_CLOSE: char = ')';
/// Opens an OR group
pub const OR_OPEN: char = '[';
/// Closes the innermost open OR group
pub const OR_CLOSE: char = ']';
/// Fuses the two adjacent siblings into an OR group
pub const OR_PIPE: char = '|';

/// Check if a character opens a quoted section
pub fn is_quote(ch: char) -> bool {
    QUOTES.contains(&ch)
}

/// Check if a character is a structural delimiter outside quotes and escapes
pub fn is_structural(ch: char) -> bool {
    matches!(ch, AND_OPEN | AND_CLOSE | OR_OPEN | OR_CLOSE | OR_PIPE)
}

/// Check if a character is a term flag
pub fn is_flag(ch: char) -> bool {
    Flag::from_char(ch).is_some()
}
