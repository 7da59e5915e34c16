//! Shape queries shared by every arena tree.
//!
//! Heights use the edge-count convention: an empty tree has height `-1`, a
//! single node has height `0`.

use std::collections::VecDeque;

use serde::Serialize;

use crate::types::{KeyNode, Node};

/// Outcome of a tree's `check_validity`: every violated rule, not just the
/// first one found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Validity {
    pub ok: bool,
    pub problems: Vec<String>,
}

impl Validity {
    pub fn from_problems(problems: Vec<String>) -> Self {
        Self {
            ok: problems.is_empty(),
            problems,
        }
    }
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node under `idx`.
pub fn first<N: Node>(arena: &[N], mut idx: u32) -> u32 {
    while let Some(l) = get_l(arena, idx) {
        idx = l;
    }
    idx
}

/// Height in edges; `-1` for an empty tree.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> i32 {
    let mut best = -1;
    let mut stack: Vec<(u32, i32)> = root.map(|r| (r, 0)).into_iter().collect();
    while let Some((i, depth)) = stack.pop() {
        best = best.max(depth);
        if let Some(l) = get_l(arena, i) {
            stack.push((l, depth + 1));
        }
        if let Some(r) = get_r(arena, i) {
            stack.push((r, depth + 1));
        }
    }
    best
}

/// Keys in sorted (in-order) sequence.
pub fn inorder<K, N>(arena: &[N], root: Option<u32>) -> Vec<K>
where
    K: Clone,
    N: KeyNode<K>,
{
    let mut out = Vec::new();
    let mut stack = Vec::new();
    let mut curr = root;
    loop {
        while let Some(i) = curr {
            stack.push(i);
            curr = get_l(arena, i);
        }
        let Some(i) = stack.pop() else {
            break;
        };
        out.push(arena[i as usize].key().clone());
        curr = get_r(arena, i);
    }
    out
}

/// Keys grouped by depth, left to right.
pub fn bfs_levels<K, N>(arena: &[N], root: Option<u32>) -> Vec<Vec<K>>
where
    K: Clone,
    N: KeyNode<K>,
{
    bfs_levels_by(arena, root, |n| n.key().clone())
}

/// Level-order walk mapping each node through `label`.
pub fn bfs_levels_by<N, T, F>(arena: &[N], root: Option<u32>, label: F) -> Vec<Vec<T>>
where
    N: Node,
    F: Fn(&N) -> T,
{
    let mut levels: Vec<Vec<T>> = Vec::new();
    let mut queue: VecDeque<(u32, usize)> = root.map(|r| (r, 0)).into_iter().collect();
    while let Some((i, depth)) = queue.pop_front() {
        if levels.len() <= depth {
            levels.push(Vec::new());
        }
        levels[depth].push(label(&arena[i as usize]));
        if let Some(l) = get_l(arena, i) {
            queue.push_back((l, depth + 1));
        }
        if let Some(r) = get_r(arena, i) {
            queue.push_back((r, depth + 1));
        }
    }
    levels
}

/// Finds the first node on the search path whose key equals `key`.
pub fn find<K, N>(arena: &[N], root: Option<u32>, key: &K) -> Option<u32>
where
    K: PartialOrd,
    N: KeyNode<K>,
{
    let mut curr = root;
    while let Some(i) = curr {
        let k = arena[i as usize].key();
        curr = if key < k {
            get_l(arena, i)
        } else if key > k {
            get_r(arena, i)
        } else {
            return Some(i);
        };
    }
    None
}
