use std::fmt::{Debug, Display};

use crate::event::{Narration, TreeEvent};
use crate::graph::{project, ToGraph, TreeGraph};
use crate::util::{self, Validity};

use super::types::AvlNode;

/// AVL tree with per-node heights.
///
/// After every insert and delete each node satisfies
/// `|height(left) - height(right)| <= 1`. The narration of the last operation
/// is available through [`AvlTree::events`].
#[derive(Clone, Debug)]
pub struct AvlTree<K> {
    arena: Vec<AvlNode<K>>,
    root: Option<u32>,
    len: usize,
    narration: Narration<K>,
}

impl<K: Debug> Default for AvlTree<K> {
    fn default() -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            len: 0,
            narration: Narration::new(),
        }
    }
}

impl<K> AvlTree<K>
where
    K: PartialOrd + Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: K) {
        self.narration.clear();
        self.narration.note(TreeEvent::Insert { key: key.clone() });
        self.arena.push(AvlNode::new(key));
        let idx = (self.arena.len() - 1) as u32;
        let root = super::util::insert(&mut self.arena, self.root, idx, &mut self.narration);
        self.root = Some(root);
        self.len += 1;
    }

    /// Removes one occurrence of `key`. Returns `false` if it was absent.
    pub fn delete(&mut self, key: &K) -> bool {
        self.narration.clear();
        self.narration.note(TreeEvent::Delete { key: key.clone() });
        if util::find(&self.arena, self.root, key).is_none() {
            self.narration.note(TreeEvent::NotFound { key: key.clone() });
            return false;
        }
        self.root = super::util::remove(&mut self.arena, self.root, key, &mut self.narration);
        self.len -= 1;
        true
    }

    pub fn contains(&self, key: &K) -> bool {
        util::find(&self.arena, self.root, key).is_some()
    }

    /// Height in edges; `-1` when empty.
    pub fn height(&self) -> i32 {
        self.root.map_or(-1, |r| self.arena[r as usize].h)
    }

    pub fn inorder(&self) -> Vec<K> {
        util::inorder(&self.arena, self.root)
    }

    pub fn bfs_levels(&self) -> Vec<Vec<K>> {
        util::bfs_levels(&self.arena, self.root)
    }

    /// Balance factor of the first node on the search path holding `key`.
    pub fn balance_factor(&self, key: &K) -> Option<i32> {
        util::find(&self.arena, self.root, key).map(|i| super::util::bf(&self.arena, Some(i)))
    }

    pub fn check_validity(&self) -> Validity {
        super::util::check_validity(&self.arena, self.root)
    }

    /// Narration of the last insert/delete.
    pub fn events(&self) -> &[TreeEvent<K>] {
        self.narration.events()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }
}

impl<K> FromIterator<K> for AvlTree<K>
where
    K: PartialOrd + Clone + Debug,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}

impl<K> ToGraph for AvlTree<K>
where
    K: Display,
{
    fn graph(&self) -> TreeGraph {
        project(&self.arena, self.root, |n| n.k.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_right_case_rotates_left() {
        let mut t = AvlTree::new();
        t.insert(1);
        t.insert(2);
        t.insert(3);
        assert_eq!(
            t.events(),
            &[
                TreeEvent::Insert { key: 3 },
                TreeEvent::RightRightCase { at: 1, balance: -2 }
            ]
        );
        assert_eq!(t.bfs_levels(), vec![vec![2], vec![1, 3]]);
        assert_eq!(t.height(), 1);
        assert_eq!(t.balance_factor(&2), Some(0));
    }

    #[test]
    fn balance_factor_of_missing_key_is_none() {
        let t: AvlTree<i32> = [2, 1, 3, 4].into_iter().collect();
        assert_eq!(t.balance_factor(&3), Some(-1));
        assert_eq!(t.balance_factor(&2), Some(-1));
        assert_eq!(t.balance_factor(&9), None);
        assert_eq!(AvlTree::<i32>::new().balance_factor(&1), None);
    }

    #[test]
    fn left_right_case_double_rotation() {
        let t: AvlTree<i32> = [30, 10, 20].into_iter().collect();
        assert_eq!(t.events()[1], TreeEvent::LeftRightCase { at: 30, child: 10 });
        assert_eq!(t.bfs_levels(), vec![vec![20], vec![10, 30]]);
    }

    #[test]
    fn delete_two_children_uses_successor() {
        let mut t: AvlTree<i32> = [20, 10, 30, 25, 40].into_iter().collect();
        assert!(t.delete(&20));
        assert_eq!(
            t.events()[1],
            TreeEvent::ReplacedWithSuccessor {
                key: 20,
                successor: 25
            }
        );
        assert_eq!(t.inorder(), vec![10, 25, 30, 40]);
        assert!(t.check_validity().ok);
    }

    #[test]
    fn delete_missing_is_noop() {
        let mut t: AvlTree<i32> = [1, 2, 3].into_iter().collect();
        assert!(!t.delete(&9));
        assert_eq!(t.events()[1], TreeEvent::NotFound { key: 9 });
        assert_eq!(t.len(), 3);
    }
}
