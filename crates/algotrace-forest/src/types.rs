//! Node trait definitions.
//!
//! Each "pointer" is an `Option<u32>` index into a [`Vec`]-backed arena. All
//! tree-manipulation functions take the arena as a slice and work with
//! indices.

/// Child links (`l`, `r`).
pub trait Node {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Parent link (`p`), for trees whose fixups walk upwards.
pub trait ParentNode: Node {
    fn p(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
}

/// Keyed node interface shared by every search tree.
pub trait KeyNode<K>: Node {
    fn key(&self) -> &K;
    fn set_key(&mut self, key: K);
}
