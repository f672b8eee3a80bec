use termtree::Tree;
use tracing::instrument;

use crate::domain::Node;

pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeRender for Node {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        match self {
            Node::Keyword(word) => Tree::new(format!("{:?}", word)),
            Node::And(children) => Tree::new("AND".to_string())
                .with_leaves(children.iter().map(|c| c.to_tree_string())),
            Node::Or(children) => Tree::new("OR".to_string())
                .with_leaves(children.iter().map(|c| c.to_tree_string())),
            Node::Not(child) => Tree::new("NOT".to_string()).with_leaves([child.to_tree_string()]),
        }
    }
}
