//! Red-black tree with CLRS-style insert and delete fixups.
//!
//! There is no shared NIL sentinel: an absent child is `None` and always
//! reads as black.

mod tree;
pub mod types;
pub mod util;

pub use tree::RbTree;
pub use types::{Color, RbNode, RbNodeLike};
pub use util::check_validity;
