//! Term classification: flags, prefix, and range detection
//!
//! Takes one raw term from the scanner and decides which leaf it becomes:
//! a plain string, a prefixed string (`field:value`), a numeric range
//! (`15-25`), or a prefixed range (`pref:15-25`). Characters the scanner
//! marked literal (escaped or quoted) appear in the output text but never
//! drive any of these decisions.

use crate::ast::{Flag, QueryNode};
use crate::lexer::{RawTerm, TermChar};

/// Outcome of classifying one raw term
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    /// The term was flag characters only; they attach to the next term
    Flags(Vec<Flag>),
    /// A finished leaf node
    Node(QueryNode),
}

/// Classify a raw term into a leaf node.
///
/// `carried` holds flags from preceding flags-only terms; they end up in
/// front of this term's own flags, preserving encounter order. A term that
/// itself strips down to nothing but flags returns `Classified::Flags` with
/// the combined list.
pub fn classify(term: &RawTerm, mut carried: Vec<Flag>) -> Classified {
    let chars = term.chars();

    // Leading flags, one at a time, stopping at the first character that is
    // not in the flag set or was escaped/quoted. Repeats are preserved.
    let mut start = 0;
    while start < chars.len() {
        let tc = chars[start];
        if tc.literal {
            break;
        }
        match Flag::from_char(tc.ch) {
            Some(flag) => {
                carried.push(flag);
                start += 1;
            }
            None => break,
        }
    }
    let rest = &chars[start..];

    if rest.is_empty() && !term.is_quoted() {
        return Classified::Flags(carried);
    }

    // Prefix split: first unescaped colon, as long as something precedes it
    let (prefix, query) = match rest
        .iter()
        .position(|tc| !tc.literal && tc.ch == ':')
    {
        Some(at) if at > 0 => (Some(text_of(&rest[..at])), &rest[at + 1..]),
        _ => (None, rest),
    };

    let flags = if carried.is_empty() {
        None
    } else {
        Some(carried)
    };

    if let Some((from, to)) = split_range(query) {
        return Classified::Node(match prefix {
            Some(prefix) => QueryNode::PRange {
                flags,
                prefix,
                from,
                to,
            },
            None => QueryNode::Range { flags, from, to },
        });
    }

    let query = text_of(query);
    Classified::Node(match prefix {
        Some(prefix) => QueryNode::Prefix {
            flags,
            prefix,
            query,
        },
        None => QueryNode::String { flags, query },
    })
}

/// Match the strict range shape: optional digits, one hyphen, optional
/// digits, nothing else. Escaped or quoted characters disqualify the term.
fn split_range(chars: &[TermChar]) -> Option<(String, String)> {
    let mut from = String::new();
    let mut to = String::new();
    let mut seen_hyphen = false;

    if chars.is_empty() {
        return None;
    }

    for tc in chars {
        if tc.literal {
            return None;
        }
        match tc.ch {
            '-' if !seen_hyphen => seen_hyphen = true,
            ch if ch.is_ascii_digit() => {
                if seen_hyphen {
                    to.push(ch);
                } else {
                    from.push(ch);
                }
            }
            _ => return None,
        }
    }

    seen_hyphen.then_some((from, to))
}

fn text_of(chars: &[TermChar]) -> String {
    chars.iter().map(|tc| tc.ch).collect()
}
