//! Domain layer: sentences and keyword rule trees
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).
//! Everything here is total: building a sentence, building a tree and evaluating
//! a tree cannot fail.

pub mod node;
pub mod render;
pub mod rules;
pub mod sentence;

pub use node::Node;
pub use render::TreeRender;
pub use rules::{meal_rule, MEAL_QUESTION};
pub use sentence::Sentence;
