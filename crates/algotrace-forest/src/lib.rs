//! Search-tree structures for the algotrace visualizer.
//!
//! All trees are arena-backed: nodes live in a `Vec<N>` owned by the tree and
//! every "pointer" is an `Option<u32>` index into that arena. Indices are
//! stable for the lifetime of a node, so they double as the external node ids
//! handed to renderers through [`graph::ToGraph`].
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`], [`ParentNode`] and [`KeyNode`] link traits |
//! [`util`] | shape queries shared by every tree (`height`, `inorder`, `bfs_levels` …) and [`Validity`] |
//! [`graph`] | [`TreeGraph`] projection consumed by renderers |
//! [`event`] | [`TreeEvent`] narration of structural decisions |
//! [`bst`] | unbalanced [`Bst`] baseline |
//! [`avl`] | height-balanced [`AvlTree`] |
//! [`red_black`] | [`RbTree`] with insert/delete fixups |
//! [`heap`] | array-backed [`MaxHeap`] |

pub mod avl;
pub mod bst;
pub mod event;
pub mod graph;
pub mod heap;
pub mod red_black;
pub mod types;
pub mod util;

pub use avl::AvlTree;
pub use bst::Bst;
pub use event::{Narration, TreeEvent};
pub use graph::{ToGraph, TreeGraph};
pub use heap::MaxHeap;
pub use red_black::{Color, RbTree};
pub use types::{KeyNode, Node, ParentNode};
pub use util::Validity;
