use std::fmt::{Debug, Display};

use crate::event::{Narration, TreeEvent};
use crate::graph::{project, ToGraph, TreeGraph};
use crate::util;

use super::types::{Color, RbNode};
use crate::util::Validity;

/// Red-black tree over unique keys.
///
/// Inserting a key that is already present is a silent no-op.
#[derive(Clone, Debug)]
pub struct RbTree<K> {
    arena: Vec<RbNode<K>>,
    root: Option<u32>,
    len: usize,
    narration: Narration<K>,
}

impl<K: Debug> Default for RbTree<K> {
    fn default() -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            len: 0,
            narration: Narration::new(),
        }
    }
}

impl<K> RbTree<K>
where
    K: PartialOrd + Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `key`. Returns `false` (and changes nothing) for duplicates.
    pub fn insert(&mut self, key: K) -> bool {
        self.narration.clear();
        if util::find(&self.arena, self.root, &key).is_some() {
            self.narration.note(TreeEvent::DuplicateSkipped { key });
            return false;
        }
        self.narration.note(TreeEvent::Insert { key: key.clone() });
        self.arena.push(RbNode::new(key));
        let idx = (self.arena.len() - 1) as u32;
        self.root = super::util::insert(&mut self.arena, self.root, idx, &mut self.narration);
        self.len += 1;
        true
    }

    /// Removes `key`. Returns `false` if it was absent.
    pub fn delete(&mut self, key: &K) -> bool {
        self.narration.clear();
        self.narration.note(TreeEvent::Delete { key: key.clone() });
        let Some(z) = util::find(&self.arena, self.root, key) else {
            self.narration.note(TreeEvent::NotFound { key: key.clone() });
            return false;
        };
        self.root = super::util::remove(&mut self.arena, self.root, z, &mut self.narration);
        self.len -= 1;
        true
    }

    pub fn contains(&self, key: &K) -> bool {
        util::find(&self.arena, self.root, key).is_some()
    }

    /// Height counted in nodes along the longest root-to-leaf path; `0` when
    /// empty. The other trees count edges.
    pub fn height(&self) -> i32 {
        util::height(&self.arena, self.root) + 1
    }

    pub fn inorder(&self) -> Vec<K> {
        util::inorder(&self.arena, self.root)
    }

    /// Keys by depth without their colors.
    pub fn bfs_keys(&self) -> Vec<Vec<K>> {
        util::bfs_levels(&self.arena, self.root)
    }

    /// Color of the node holding `key`.
    pub fn color(&self, key: &K) -> Option<Color> {
        util::find(&self.arena, self.root, key).map(|i| self.arena[i as usize].color)
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

impl<K> FromIterator<K> for RbTree<K>
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

impl<K> RbTree<K>
where
    K: Display,
{
    /// Levels with a color suffix per node: `10B`, `5R`.
    pub fn bfs_levels(&self) -> Vec<Vec<String>> {
        util::bfs_levels_by(&self.arena, self.root, |n| format!("{}{}", n.k, n.color.suffix()))
    }
}

impl<K> ToGraph for RbTree<K>
where
    K: Display,
{
    /// Labels carry the color: `10●` for red, `10○` for black.
    fn graph(&self) -> TreeGraph {
        project(&self.arena, self.root, |n| {
            let mark = match n.color {
                Color::Red => '●',
                Color::Black => '○',
            };
            format!("{}{mark}", n.k)
        })
    }
}
