//! booltree: check sentences against keyword rule trees
//!
//! Architecture:
//! - `domain`: sentences, rule trees and their evaluation (pure, total)
//! - `application`: quiz service driving a rule from line-oriented input
//! - `config`: layered settings (defaults, global file, explicit file, env)
//! - `cli`: argument parsing and command dispatch
//!
//! ```
//! use booltree::{Node, Sentence};
//!
//! let rule = Node::and([
//!     Node::keyword("tea"),
//!     Node::not(Node::keyword("milk")),
//! ]);
//! assert!(rule.evaluate(&Sentence::new("green tea please")));
//! assert!(!rule.evaluate(&Sentence::new("tea with milk")));
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{Node, Sentence};
