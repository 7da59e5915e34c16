//! Unbalanced binary search tree, the "no balancing" baseline.

mod tree;
pub mod types;
pub mod util;

pub use tree::Bst;
pub use types::BstNode;
