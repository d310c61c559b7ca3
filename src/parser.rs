//! Grammar engine for query strings
//!
//! Consumes the scanner's stream of classified terms and structural markers
//! in a single left-to-right pass, building the nested AND/OR tree over an
//! explicit stack of open group contexts.
//!
//! ```text
//! (        push an AND context
//! [        push an OR context
//! )        close the innermost context; without one, append ')' to the
//!          preceding leaf's text
//! ]        close the innermost context when it is an OR; otherwise append
//!          ']' to the preceding leaf's text
//! |        fuse the adjacent siblings into an OR group
//! end      flush any still-open contexts as groups, innermost first
//! ```
//!
//! Parsing is total: there is no error case, only tolerant fallbacks. The
//! two delimiter repairs are deliberately asymmetric: an unmatched close
//! turns into term text, while an unmatched open closes implicitly at the
//! end of input.

use std::mem;

use tracing::trace;

use crate::ast::{Flag, QueryAst, QueryNode};
use crate::classify::{classify, Classified};
use crate::lexer::{Lexer, Token};
use crate::syntax;

/// Parse a query string into its tree.
///
/// Never fails; empty input yields an empty tree.
pub fn parse(input: &str) -> QueryAst {
    let mut lexer = Lexer::new(input);
    let mut stack = GroupStack::new();

    while let Some(token) = lexer.next_token() {
        stack.feed(token);
    }

    let ast = stack.finish();
    trace!(nodes = ast.len(), "parsed query string");
    ast
}

/// Convenience wrapper for callers holding an optional query; absent input
/// parses as empty.
pub fn parse_opt(input: Option<&str>) -> QueryAst {
    parse(input.unwrap_or_default())
}

/// Combinator tag of an open group context
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Combinator {
    And,
    Or,
}

/// One grouping level: the combinator it was opened with (`None` for the
/// root level, which is not a group), the children collected so far, and
/// whether a `|` is waiting for its right-hand sibling.
#[derive(Debug, Default)]
struct Level {
    combinator: Option<Combinator>,
    nodes: Vec<QueryNode>,
    or_pending: bool,
}

impl Level {
    fn open(combinator: Combinator) -> Self {
        Self {
            combinator: Some(combinator),
            ..Self::default()
        }
    }

    /// Wrap the collected children into the group node this level stands
    /// for. Levels that collected nothing produce no group at all.
    fn into_group(self) -> Option<QueryNode> {
        let combinator = self.combinator?;
        if self.nodes.is_empty() {
            return None;
        }
        Some(match combinator {
            Combinator::And => QueryNode::And {
                queries: self.nodes,
            },
            Combinator::Or => QueryNode::Or {
                queries: self.nodes,
            },
        })
    }
}

/// The grammar state machine: a root accumulator plus a stack of open group
/// contexts, innermost last.
struct GroupStack {
    root: Level,
    open: Vec<Level>,
    pending_flags: Vec<Flag>,
}

impl GroupStack {
    fn new() -> Self {
        Self {
            root: Level::default(),
            open: Vec::new(),
            pending_flags: Vec::new(),
        }
    }

    fn current(&mut self) -> &mut Level {
        self.open.last_mut().unwrap_or(&mut self.root)
    }

    fn feed(&mut self, token: Token) {
        match token {
            Token::Term(term) => {
                let carried = mem::take(&mut self.pending_flags);
                match classify(&term, carried) {
                    Classified::Flags(flags) => self.pending_flags = flags,
                    Classified::Node(node) => self.push_node(node),
                }
            }
            Token::LeftParen => self.open.push(Level::open(Combinator::And)),
            Token::LeftBracket => self.open.push(Level::open(Combinator::Or)),
            Token::RightParen => self.close_any(),
            Token::RightBracket => self.close_or(),
            Token::Pipe => self.current().or_pending = true,
        }
    }

    /// Add a finished node (leaf or group) at the current level. A pending
    /// `|` fuses it with the sibling before it; fusing into an existing OR
    /// group extends that group instead of nesting.
    fn push_node(&mut self, node: QueryNode) {
        let level = self.current();
        let node = if level.or_pending {
            level.or_pending = false;
            match level.nodes.pop() {
                Some(QueryNode::Or { mut queries }) => {
                    queries.push(node);
                    QueryNode::Or { queries }
                }
                Some(prev) => QueryNode::Or {
                    queries: vec![prev, node],
                },
                None => node,
            }
        } else {
            node
        };
        level.nodes.push(node);
    }

    /// `)` closes whatever context is innermost; with none open it is term
    /// text that happens to sit after a term boundary.
    fn close_any(&mut self) {
        match self.open.pop() {
            Some(level) => {
                if let Some(group) = level.into_group() {
                    self.push_node(group);
                }
            }
            None => self.append_literal(syntax::AND_CLOSE),
        }
    }

    /// `]` closes the innermost context only when that context is an OR.
    fn close_or(&mut self) {
        let innermost_is_or = matches!(
            self.open.last(),
            Some(level) if level.combinator == Some(Combinator::Or)
        );
        if innermost_is_or {
            if let Some(level) = self.open.pop() {
                if let Some(group) = level.into_group() {
                    self.push_node(group);
                }
            }
        } else {
            self.append_literal(syntax::OR_CLOSE);
        }
    }

    /// Tolerant fallback for an unmatched close delimiter: append it to the
    /// text of the preceding leaf. Without a preceding leaf at this level
    /// the character has nothing to attach to and is discarded.
    fn append_literal(&mut self, ch: char) {
        if let Some(node) = self.current().nodes.last_mut() {
            node.append_literal(ch);
        }
    }

    /// End of input: flush still-open contexts, innermost first. Each one
    /// becomes a group on its parent level, as if the close delimiter had
    /// been written.
    fn finish(mut self) -> QueryAst {
        while let Some(level) = self.open.pop() {
            if let Some(group) = level.into_group() {
                self.push_node(group);
            }
        }
        QueryAst(self.root.nodes)
    }
}
