//! Built-in rule used when no configuration overrides it

use crate::domain::Node;

pub const MEAL_QUESTION: &str = "What are the things you can’t eat in the afternoon?";

/// `(breakfast || dinner || supper) && !(lunch || brunch)`
pub fn meal_rule() -> Node {
    Node::and([
        Node::or([
            Node::keyword("breakfast"),
            Node::keyword("dinner"),
            Node::keyword("supper"),
        ]),
        Node::not(Node::or([Node::keyword("lunch"), Node::keyword("brunch")])),
    ])
}
