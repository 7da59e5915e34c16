use std::fmt::Debug;

use crate::event::{Narration, TreeEvent};
use crate::util::{first, get_l, get_r, height as tree_height, inorder, set_l, set_r, Validity};

use super::types::AvlNodeLike;

#[inline]
fn h<K, N>(arena: &[N], n: Option<u32>) -> i32
where
    N: AvlNodeLike<K>,
{
    n.map_or(-1, |i| arena[i as usize].h())
}

#[inline]
fn upd<K, N>(arena: &mut [N], n: u32)
where
    N: AvlNodeLike<K>,
{
    let lh = h(arena, get_l(arena, n));
    let rh = h(arena, get_r(arena, n));
    arena[n as usize].set_h(1 + lh.max(rh));
}

#[inline]
fn key<K, N>(arena: &[N], n: u32) -> K
where
    K: Clone,
    N: AvlNodeLike<K>,
{
    arena[n as usize].key().clone()
}

/// Balance factor `height(left) - height(right)`; `0` for an empty subtree.
pub fn bf<K, N>(arena: &[N], n: Option<u32>) -> i32
where
    N: AvlNodeLike<K>,
{
    match n {
        Some(i) => h(arena, get_l(arena, i)) - h(arena, get_r(arena, i)),
        None => 0,
    }
}

fn r_rotate<K, N>(arena: &mut [N], y: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    let Some(x) = get_l(arena, y) else {
        return y;
    };
    let t2 = get_r(arena, x);
    set_r(arena, x, Some(y));
    set_l(arena, y, t2);
    upd(arena, y);
    upd(arena, x);
    x
}

fn l_rotate<K, N>(arena: &mut [N], x: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    let Some(y) = get_r(arena, x) else {
        return x;
    };
    let t2 = get_l(arena, y);
    set_l(arena, y, Some(x));
    set_r(arena, x, t2);
    upd(arena, x);
    upd(arena, y);
    y
}

/// Restores `|bf| <= 1` at `n` (whose height is current) and returns the new
/// subtree root.
fn rebalance<K, N>(arena: &mut [N], n: u32, narration: &mut Narration<K>) -> u32
where
    K: Clone + Debug,
    N: AvlNodeLike<K>,
{
    let balance = bf(arena, Some(n));

    if balance > 1 {
        let Some(l) = get_l(arena, n) else {
            return n;
        };
        if bf(arena, Some(l)) < 0 {
            narration.note(TreeEvent::LeftRightCase {
                at: key(arena, n),
                child: key(arena, l),
            });
            let l = l_rotate(arena, l);
            set_l(arena, n, Some(l));
        } else {
            narration.note(TreeEvent::LeftLeftCase {
                at: key(arena, n),
                balance,
            });
        }
        return r_rotate(arena, n);
    }

    if balance < -1 {
        let Some(r) = get_r(arena, n) else {
            return n;
        };
        if bf(arena, Some(r)) > 0 {
            narration.note(TreeEvent::RightLeftCase {
                at: key(arena, n),
                child: key(arena, r),
            });
            let r = r_rotate(arena, r);
            set_r(arena, n, Some(r));
        } else {
            narration.note(TreeEvent::RightRightCase {
                at: key(arena, n),
                balance,
            });
        }
        return l_rotate(arena, n);
    }

    n
}

/// Inserts arena node `n` into the subtree at `node`, rebalancing every
/// ancestor on the way back up. Equal keys go right.
pub fn insert<K, N>(arena: &mut [N], node: Option<u32>, n: u32, narration: &mut Narration<K>) -> u32
where
    K: PartialOrd + Clone + Debug,
    N: AvlNodeLike<K>,
{
    let Some(c) = node else {
        arena[n as usize].set_h(0);
        return n;
    };
    if arena[n as usize].key() < arena[c as usize].key() {
        let l = insert(arena, get_l(arena, c), n, narration);
        set_l(arena, c, Some(l));
    } else {
        let r = insert(arena, get_r(arena, c), n, narration);
        set_r(arena, c, Some(r));
    }
    upd(arena, c);
    rebalance(arena, c, narration)
}

/// Removes one node holding `key` from the subtree at `node`.
///
/// Two-children nodes copy their in-order successor's key, then the successor
/// is removed from the right subtree. Returns the new subtree root.
pub fn remove<K, N>(
    arena: &mut [N],
    node: Option<u32>,
    k: &K,
    narration: &mut Narration<K>,
) -> Option<u32>
where
    K: PartialOrd + Clone + Debug,
    N: AvlNodeLike<K>,
{
    let n = node?;
    let nk = arena[n as usize].key();
    if k < nk {
        let l = remove(arena, get_l(arena, n), k, narration);
        set_l(arena, n, l);
    } else if k > nk {
        let r = remove(arena, get_r(arena, n), k, narration);
        set_r(arena, n, r);
    } else {
        match (get_l(arena, n), get_r(arena, n)) {
            (None, None) => {
                narration.note(TreeEvent::RemovedLeaf { key: key(arena, n) });
                return None;
            }
            (Some(c), None) | (None, Some(c)) => {
                narration.note(TreeEvent::PromotedChild { key: key(arena, n) });
                return Some(c);
            }
            (Some(_), Some(r)) => {
                let s = first(arena, r);
                let successor = key(arena, s);
                narration.note(TreeEvent::ReplacedWithSuccessor {
                    key: key(arena, n),
                    successor: successor.clone(),
                });
                arena[n as usize].set_key(successor.clone());
                let r = remove(arena, Some(r), &successor, narration);
                set_r(arena, n, r);
            }
        }
    }
    upd(arena, n);
    Some(rebalance(arena, n, narration))
}

/// Checks stored heights, `|bf| <= 1` at every node and in-order key order.
/// Every violation found is reported.
pub fn check_validity<K, N>(arena: &[N], root: Option<u32>) -> Validity
where
    K: PartialOrd + Clone + Debug,
    N: AvlNodeLike<K>,
{
    let mut problems = Vec::new();
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        let l = get_l(arena, i);
        let r = get_r(arena, i);
        let expected = tree_height(arena, Some(i));
        let actual = arena[i as usize].h();
        if expected != actual {
            problems.push(format!(
                "Height mismatch at {:?}: expected {expected}, got {actual}",
                arena[i as usize].key()
            ));
        }
        let balance = h(arena, l) - h(arena, r);
        if !(-1..=1).contains(&balance) {
            problems.push(format!(
                "AVL balance violated at {:?}: bf={balance}",
                arena[i as usize].key()
            ));
        }
        stack.extend(l);
        stack.extend(r);
    }

    let keys: Vec<K> = inorder(arena, root);
    if keys.windows(2).any(|w| w[0] > w[1]) {
        problems.push("Node order violated".to_string());
    }
    Validity::from_problems(problems)
}
