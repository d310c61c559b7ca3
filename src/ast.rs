//! Query tree produced by the parser
//!
//! The tree is an ordered sequence of nodes, each either a leaf (a single
//! search term) or a group combining child nodes with AND or OR semantics.
//! It is built once per parse, immutable afterwards, and owned by the
//! caller; the executor on the other side of the contract interprets the
//! node kinds, prefixes, ranges, and flags.
//!
//! The serde representation is the wire contract with downstream consumers:
//!
//! ```json
//! [
//!   {"type": "prefix", "prefix": "title", "query": "rust"},
//!   {"type": "or", "queries": [
//!     {"flags": ["+"], "type": "string", "query": "cli"},
//!     {"type": "range", "from": "15", "to": "25"}
//!   ]}
//! ]
//! ```
//!
//! `flags` and `prefix` keys are omitted entirely when absent; a leaf that
//! had no flag characters carries no `flags` key rather than an empty list.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{QueryError, Result};

/// Single-character term modifier
///
/// Flags precede a term (`+*foo`), are order-preserving, and may repeat.
/// Their meaning is assigned by the executor, not by the parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flag {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "*")]
    Asterisk,
    #[serde(rename = "/")]
    Slash,
    #[serde(rename = "!")]
    Bang,
    #[serde(rename = "#")]
    Hash,
    #[serde(rename = "~")]
    Tilde,
}

impl Flag {
    /// The full flag set, in canonical order
    pub const ALL: [Flag; 6] = [
        Flag::Plus,
        Flag::Asterisk,
        Flag::Slash,
        Flag::Bang,
        Flag::Hash,
        Flag::Tilde,
    ];

    /// Map a character to its flag, if it is one
    pub fn from_char(ch: char) -> Option<Flag> {
        match ch {
            '+' => Some(Flag::Plus),
            '*' => Some(Flag::Asterisk),
            '/' => Some(Flag::Slash),
            '!' => Some(Flag::Bang),
            '#' => Some(Flag::Hash),
            '~' => Some(Flag::Tilde),
            _ => None,
        }
    }

    /// The character this flag is written as
    pub fn as_char(self) -> char {
        match self {
            Flag::Plus => '+',
            Flag::Asterisk => '*',
            Flag::Slash => '/',
            Flag::Bang => '!',
            Flag::Hash => '#',
            Flag::Tilde => '~',
        }
    }
}

impl TryFrom<char> for Flag {
    type Error = QueryError;

    fn try_from(ch: char) -> Result<Flag> {
        Flag::from_char(ch).ok_or(QueryError::UnknownFlag(ch))
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One node of the query tree
///
/// Leaves carry the term text; `And`/`Or` groups carry an ordered, never
/// empty list of child nodes and nest without bound.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QueryNode {
    /// A plain term
    String {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        flags: Option<Vec<Flag>>,
        query: String,
    },
    /// A term scoped to a named field (`field:value`)
    Prefix {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        flags: Option<Vec<Flag>>,
        prefix: String,
        query: String,
    },
    /// A numeric interval (`15-25`, `15-`, `-25`); both bounds are digit
    /// strings and either may be empty
    Range {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        flags: Option<Vec<Flag>>,
        from: String,
        to: String,
    },
    /// A numeric interval scoped to a named field (`pref:15-25`)
    PRange {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        flags: Option<Vec<Flag>>,
        prefix: String,
        from: String,
        to: String,
    },
    /// All children must match
    And { queries: Vec<QueryNode> },
    /// At least one child must match
    Or { queries: Vec<QueryNode> },
}

impl QueryNode {
    /// Node kind name, matching the serialized `type` tag
    pub fn kind(&self) -> &'static str {
        match self {
            QueryNode::String { .. } => "string",
            QueryNode::Prefix { .. } => "prefix",
            QueryNode::Range { .. } => "range",
            QueryNode::PRange { .. } => "prange",
            QueryNode::And { .. } => "and",
            QueryNode::Or { .. } => "or",
        }
    }

    /// Whether this node is a leaf (not a group)
    pub fn is_leaf(&self) -> bool {
        !matches!(self, QueryNode::And { .. } | QueryNode::Or { .. })
    }

    /// Flags attached to this leaf, if any; groups carry none
    pub fn flags(&self) -> Option<&[Flag]> {
        match self {
            QueryNode::String { flags, .. }
            | QueryNode::Prefix { flags, .. }
            | QueryNode::Range { flags, .. }
            | QueryNode::PRange { flags, .. } => flags.as_deref(),
            QueryNode::And { .. } | QueryNode::Or { .. } => None,
        }
    }

    /// Append a delimiter character that turned out not to be structural to
    /// the leaf's text. A range stops being a range once it carries the
    /// extra character; groups are left untouched.
    pub(crate) fn append_literal(&mut self, ch: char) {
        let node = std::mem::replace(
            self,
            QueryNode::String {
                flags: None,
                query: String::new(),
            },
        );
        *self = match node {
            QueryNode::String { flags, mut query } => {
                query.push(ch);
                QueryNode::String { flags, query }
            }
            QueryNode::Prefix {
                flags,
                prefix,
                mut query,
            } => {
                query.push(ch);
                QueryNode::Prefix {
                    flags,
                    prefix,
                    query,
                }
            }
            QueryNode::Range { flags, from, to } => QueryNode::String {
                flags,
                query: format!("{from}-{to}{ch}"),
            },
            QueryNode::PRange {
                flags,
                prefix,
                from,
                to,
            } => QueryNode::Prefix {
                flags,
                prefix,
                query: format!("{from}-{to}{ch}"),
            },
            group => group,
        };
    }
}

/// Ordered sequence of top-level nodes produced by one parse
///
/// Serializes as a bare JSON array; insertion order is significant and
/// preserved throughout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryAst(pub Vec<QueryNode>);

impl QueryAst {
    /// The top-level nodes, in input order
    pub fn nodes(&self) -> &[QueryNode] {
        &self.0
    }

    /// Number of top-level nodes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the parse produced no nodes at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the tree, yielding the top-level nodes
    pub fn into_nodes(self) -> Vec<QueryNode> {
        self.0
    }

    /// Serialize to the JSON wire shape
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a tree from its JSON wire shape
    pub fn from_json(json: &str) -> Result<QueryAst> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<Vec<QueryNode>> for QueryAst {
    fn from(nodes: Vec<QueryNode>) -> Self {
        QueryAst(nodes)
    }
}

impl IntoIterator for QueryAst {
    type Item = QueryNode;
    type IntoIter = std::vec::IntoIter<QueryNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryAst {
    type Item = &'a QueryNode;
    type IntoIter = std::slice::Iter<'a, QueryNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
