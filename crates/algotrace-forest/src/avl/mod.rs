//! Height-balanced AVL tree.

mod tree;
pub mod types;
pub mod util;

pub use tree::AvlTree;
pub use types::{AvlNode, AvlNodeLike};
pub use util::check_validity;
