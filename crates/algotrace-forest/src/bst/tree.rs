use std::fmt::{Debug, Display};

use crate::graph::{project, ToGraph, TreeGraph};
use crate::util::{self, Validity};

use super::types::BstNode;

/// Unbalanced binary search tree.
///
/// Duplicates are kept (equal keys go right). Height degrades to O(n) on
/// sorted input, which is what makes it a useful comparison point.
#[derive(Clone, Debug)]
pub struct Bst<K> {
    arena: Vec<BstNode<K>>,
    root: Option<u32>,
    len: usize,
}

impl<K> Default for Bst<K> {
    fn default() -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            len: 0,
        }
    }
}

impl<K> Bst<K>
where
    K: PartialOrd + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `key` and returns the 1-based depth of the new node.
    pub fn insert(&mut self, key: K) -> usize {
        self.arena.push(BstNode::new(key));
        let idx = (self.arena.len() - 1) as u32;
        let (root, depth) = super::util::insert(&mut self.arena, self.root, idx);
        self.root = Some(root);
        self.len += 1;
        depth
    }

    /// Removes one occurrence of `key`. Returns `false` if it was absent.
    pub fn delete(&mut self, key: &K) -> bool {
        if util::find(&self.arena, self.root, key).is_none() {
            return false;
        }
        self.root = super::util::remove(&mut self.arena, self.root, key);
        self.len -= 1;
        true
    }

    pub fn contains(&self, key: &K) -> bool {
        util::find(&self.arena, self.root, key).is_some()
    }

    pub fn height(&self) -> i32 {
        util::height(&self.arena, self.root)
    }

    pub fn inorder(&self) -> Vec<K> {
        util::inorder(&self.arena, self.root)
    }

    pub fn bfs_levels(&self) -> Vec<Vec<K>> {
        util::bfs_levels(&self.arena, self.root)
    }

    pub fn check_validity(&self) -> Validity
    where
        K: Debug,
    {
        super::util::check_validity(&self.arena, self.root)
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

impl<K> FromIterator<K> for Bst<K>
where
    K: PartialOrd + Clone,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}

impl<K> ToGraph for Bst<K>
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
    fn insert_reports_depth() {
        let mut t = Bst::new();
        assert_eq!(t.insert(5), 1);
        assert_eq!(t.insert(3), 2);
        assert_eq!(t.insert(8), 2);
        assert_eq!(t.insert(4), 3);
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn duplicates_go_right() {
        let t: Bst<i32> = [5, 5, 5].into_iter().collect();
        assert_eq!(t.height(), 2);
        assert_eq!(t.inorder(), vec![5, 5, 5]);
        assert_eq!(t.bfs_levels(), vec![vec![5], vec![5], vec![5]]);
        assert!(t.check_validity().ok);
    }

    #[test]
    fn delete_splices_deep_successor() {
        let mut t: Bst<i32> = [50, 20, 80, 70, 60, 65].into_iter().collect();
        assert!(t.delete(&50));
        assert_eq!(t.bfs_levels(), vec![vec![60], vec![20, 80], vec![70], vec![65]]);
        assert_eq!(t.len(), 5);
        assert!(t.check_validity().ok);
    }

    #[test]
    fn empty_tree_shape() {
        let t = Bst::<i32>::new();
        assert_eq!(t.height(), -1);
        assert!(t.inorder().is_empty());
        assert!(t.bfs_levels().is_empty());
        assert_eq!(t.graph(), TreeGraph::default());
    }
}
