//! Keyword rule trees: AND/OR/NOT combinators over keyword leaves

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::domain::Sentence;

/// A node of a keyword rule tree.
///
/// Children are owned by their parent and moved in at construction time, so a
/// tree is always acyclic. Trees are never mutated after they are built.
///
/// In TOML a node is an externally tagged table:
/// `{ keyword = "dinner" }`, `{ and = [...] }`, `{ or = [...] }`, `{ not = {...} }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    /// Matches when the sentence contains this exact token
    Keyword(String),
    /// Matches when every child matches; empty matches everything
    And(Vec<Node>),
    /// Matches when any child matches; empty matches nothing
    Or(Vec<Node>),
    /// Matches when the child does not
    Not(Box<Node>),
}

impl Node {
    pub fn keyword(word: impl Into<String>) -> Self {
        Node::Keyword(word.into())
    }

    pub fn and(children: impl IntoIterator<Item = Node>) -> Self {
        Node::And(children.into_iter().collect())
    }

    pub fn or(children: impl IntoIterator<Item = Node>) -> Self {
        Node::Or(children.into_iter().collect())
    }

    pub fn not(child: Node) -> Self {
        Node::Not(Box::new(child))
    }

    /// Evaluate the tree against a sentence.
    ///
    /// Pure and total. And/Or stop at the first deciding child.
    pub fn evaluate(&self, sentence: &Sentence) -> bool {
        match self {
            Node::Keyword(word) => sentence.contains(word),
            Node::And(children) => children.iter().all(|child| child.evaluate(sentence)),
            Node::Or(children) => children.iter().any(|child| child.evaluate(sentence)),
            Node::Not(child) => !child.evaluate(sentence),
        }
    }

    /// All keywords in left-to-right order, duplicates included.
    pub fn keywords(&self) -> Vec<&str> {
        let mut words = Vec::new();
        self.collect_keywords(&mut words);
        words
    }

    fn collect_keywords<'a>(&'a self, words: &mut Vec<&'a str>) {
        match self {
            Node::Keyword(word) => words.push(word),
            Node::And(children) | Node::Or(children) => {
                for child in children {
                    child.collect_keywords(words);
                }
            }
            Node::Not(child) => child.collect_keywords(words),
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Node::Keyword(_) => 1,
            Node::And(children) | Node::Or(children) => {
                1 + children.iter().map(Node::depth).max().unwrap_or(0)
            }
            Node::Not(child) => 1 + child.depth(),
        }
    }

    fn is_compound(&self) -> bool {
        matches!(self, Node::And(c) | Node::Or(c) if c.len() > 1)
    }
}

/// Operand position: compound children get parentheses.
struct Operand<'a>(&'a Node);

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_compound() {
            write!(f, "({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Infix rendering, e.g. `(breakfast || dinner) && !lunch`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Keyword(word) => f.write_str(word),
            Node::And(children) if children.is_empty() => f.write_str("true"),
            Node::Or(children) if children.is_empty() => f.write_str("false"),
            Node::And(children) => write!(f, "{}", children.iter().map(Operand).join(" && ")),
            Node::Or(children) => write!(f, "{}", children.iter().map(Operand).join(" || ")),
            Node::Not(child) => write!(f, "!{}", Operand(&**child)),
        }
    }
}
