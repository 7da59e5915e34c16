use std::fmt::Debug;

use crate::types::KeyNode;
use crate::util::{get_l, get_r, set_l, set_r, Validity};

/// Hangs arena node `n` under `root` without rebalancing.
///
/// Keys equal to a visited node go right. Returns the new root and the
/// 1-based depth at which `n` landed.
pub fn insert<K, N>(arena: &mut [N], root: Option<u32>, n: u32) -> (u32, usize)
where
    K: PartialOrd,
    N: KeyNode<K>,
{
    let Some(root) = root else {
        return (n, 1);
    };

    let mut curr = root;
    let mut depth = 1;
    loop {
        depth += 1;
        let go_left = arena[n as usize].key() < arena[curr as usize].key();
        let next = if go_left {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };
        match next {
            Some(next) => curr = next,
            None => {
                if go_left {
                    set_l(arena, curr, Some(n));
                } else {
                    set_r(arena, curr, Some(n));
                }
                return (root, depth);
            }
        }
    }
}

/// Removes the first node on the search path holding `key` from the tree at
/// `root` and returns the new root.
///
/// Iterative, so degenerate (list-shaped) trees of any depth are fine. A
/// two-children node takes the key of its in-order successor and the
/// successor node is spliced out instead.
pub fn remove<K, N>(arena: &mut [N], root: Option<u32>, key: &K) -> Option<u32>
where
    K: PartialOrd + Clone,
    N: KeyNode<K>,
{
    // (parent, went_left) of the current node.
    let mut link: Option<(u32, bool)> = None;
    let mut curr = root;
    let n = loop {
        let i = curr?;
        let k = arena[i as usize].key();
        if key < k {
            link = Some((i, true));
            curr = get_l(arena, i);
        } else if key > k {
            link = Some((i, false));
            curr = get_r(arena, i);
        } else {
            break i;
        }
    };

    let replacement = match (get_l(arena, n), get_r(arena, n)) {
        (None, r) => r,
        (l, None) => l,
        (Some(_), Some(r)) => {
            let mut sp = n;
            let mut s = r;
            while let Some(l) = get_l(arena, s) {
                sp = s;
                s = l;
            }
            let successor = arena[s as usize].key().clone();
            arena[n as usize].set_key(successor);
            let rest = get_r(arena, s);
            if sp == n {
                set_r(arena, n, rest);
            } else {
                set_l(arena, sp, rest);
            }
            return root;
        }
    };

    match link {
        None => replacement,
        Some((p, true)) => {
            set_l(arena, p, replacement);
            root
        }
        Some((p, false)) => {
            set_r(arena, p, replacement);
            root
        }
    }
}

/// Checks the search-tree order: every key in a left subtree is smaller than
/// its ancestor, every key in a right subtree is greater or equal.
pub fn check_validity<K, N>(arena: &[N], root: Option<u32>) -> Validity
where
    K: PartialOrd + Clone + Debug,
    N: KeyNode<K>,
{
    let mut problems = Vec::new();
    // (node, inclusive lower bound, exclusive upper bound)
    let mut stack: Vec<(u32, Option<K>, Option<K>)> =
        root.map(|r| (r, None, None)).into_iter().collect();
    while let Some((i, lo, hi)) = stack.pop() {
        let k = arena[i as usize].key();
        let above = lo.as_ref().map_or(true, |lo| k >= lo);
        let below = hi.as_ref().map_or(true, |hi| k < hi);
        if !(above && below) {
            problems.push(format!("Key {k:?} out of order (bounds {lo:?}..{hi:?})"));
        }
        if let Some(l) = get_l(arena, i) {
            stack.push((l, lo.clone(), Some(k.clone())));
        }
        if let Some(r) = get_r(arena, i) {
            stack.push((r, Some(k.clone()), hi));
        }
    }
    Validity::from_problems(problems)
}
