//! Structured narration of tree operations.
//!
//! Each insert/delete on an [`AvlTree`](crate::AvlTree) or
//! [`RbTree`](crate::RbTree) clears the narration and records every
//! structural decision it takes. The UI formats these tags; nothing in the
//! trees reads them back.

use std::fmt::Debug;

use serde::Serialize;

/// One structural decision, keyed by the node keys involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TreeEvent<K> {
    Insert { key: K },
    Delete { key: K },
    NotFound { key: K },
    DuplicateSkipped { key: K },
    RemovedLeaf { key: K },
    PromotedChild { key: K },
    ReplacedWithSuccessor { key: K, successor: K },
    RotateLeft { at: K },
    RotateRight { at: K },
    /// AVL: rotate right at `at`.
    LeftLeftCase { at: K, balance: i32 },
    /// AVL: rotate left at `at`.
    RightRightCase { at: K, balance: i32 },
    /// AVL: rotate left at `child`, then right at `at`.
    LeftRightCase { at: K, child: K },
    /// AVL: rotate right at `child`, then left at `at`.
    RightLeftCase { at: K, child: K },
    /// Red-black insert: parent and uncle red, push red up to the grandparent.
    RecolorUp { parent: K, uncle: K, grandparent: K },
    /// Red-black insert: node and red parent form a triangle, rotate at parent.
    Triangle { node: K, parent: K },
    /// Red-black insert: line case, recolor and rotate at grandparent.
    Line { parent: K, grandparent: K },
    ForceRootBlack { key: K },
    /// Red-black delete: splice out a node with at most one child.
    Transplant { key: K },
    /// Red-black delete fixup: red sibling, rotate at parent.
    SiblingRed { sibling: K, parent: K },
    /// Red-black delete fixup: black sibling with black children.
    SiblingChildrenBlack { sibling: K, parent: K },
    /// Red-black delete fixup: inner nephew red, rotate at sibling.
    InnerNephewRed { sibling: K, nephew: K },
    /// Red-black delete fixup: outer nephew red, rotate at parent and stop.
    OuterNephewRed { sibling: K, nephew: K, parent: K },
    ClearDoubleBlack { key: K },
}

/// Event sink for the operation in progress.
#[derive(Debug, Clone)]
pub struct Narration<K> {
    events: Vec<TreeEvent<K>>,
}

impl<K: Debug> Narration<K> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn note(&mut self, event: TreeEvent<K>) {
        tracing::trace!(?event, "tree event");
        self.events.push(event);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn events(&self) -> &[TreeEvent<K>] {
        &self.events
    }
}

impl<K: Debug> Default for Narration<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_kind_tag() {
        let json = serde_json::to_value(TreeEvent::RotateLeft { at: 7 }).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "rotate-left", "at": 7 }));

        let json = serde_json::to_value(TreeEvent::ReplacedWithSuccessor {
            key: 5,
            successor: 6,
        })
        .unwrap();
        assert_eq!(json["kind"], "replaced-with-successor");
    }

    #[test]
    fn clear_resets() {
        let mut n = Narration::new();
        n.note(TreeEvent::Insert { key: 1 });
        assert_eq!(n.events().len(), 1);
        n.clear();
        assert!(n.events().is_empty());
    }
}
