//! Parse tree representation and rendering
//!
//! A successful nonterminal match produces a [`ParseTree::Node`] whose symbol
//! is the nonterminal's name and whose children are the winning alternative's
//! atom results in order; terminals produce [`ParseTree::Leaf`] values holding
//! the matched text. An alternative of a single atom yields that atom's own
//! result wrapped once under the current nonterminal, never double-wrapped.
//!
//! Two external shapes are provided:
//!     - JSON, via `Serialize`: a node is the array `[symbol, child...]`, a
//!       leaf a bare string.
//!     - `render()`: one line per node, structure encoded as two-space
//!       indentation, leaves quoted.

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// The result of a successful match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTree {
    /// Raw text matched by a terminal (possibly empty).
    Leaf(String),
    /// A nonterminal match: the rule name and one child per atom of the
    /// winning alternative.
    Node {
        symbol: String,
        children: Vec<ParseTree>,
    },
}

impl ParseTree {
    pub fn leaf(text: impl Into<String>) -> Self {
        ParseTree::Leaf(text.into())
    }

    pub fn node(symbol: impl Into<String>, children: Vec<ParseTree>) -> Self {
        ParseTree::Node {
            symbol: symbol.into(),
            children,
        }
    }

    /// The producing nonterminal's name, for nodes.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            ParseTree::Leaf(_) => None,
            ParseTree::Node { symbol, .. } => Some(symbol),
        }
    }

    /// Child results, empty for leaves.
    pub fn children(&self) -> &[ParseTree] {
        match self {
            ParseTree::Leaf(_) => &[],
            ParseTree::Node { children, .. } => children,
        }
    }

    /// The matched text, for leaves.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            ParseTree::Leaf(text) => Some(text),
            ParseTree::Node { .. } => None,
        }
    }

    /// Indented one-line-per-node rendering for human inspection.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        match self {
            ParseTree::Leaf(text) => {
                out.push_str(&format!("{:?}", text));
                out.push('\n');
            }
            ParseTree::Node { symbol, children } => {
                out.push_str(symbol);
                out.push('\n');
                for child in children {
                    child.render_into(out, depth + 1);
                }
            }
        }
    }
}

impl Serialize for ParseTree {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ParseTree::Leaf(text) => serializer.serialize_str(text),
            ParseTree::Node { symbol, children } => {
                let mut seq = serializer.serialize_seq(Some(children.len() + 1))?;
                seq.serialize_element(symbol)?;
                for child in children {
                    seq.serialize_element(child)?;
                }
                seq.end()
            }
        }
    }
}
