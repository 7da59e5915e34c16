use std::fmt::Debug;

use crate::event::{Narration, TreeEvent};
use crate::util::{first, get_l, get_r, set_l, set_r, Validity};

use super::types::{Color, RbNodeLike};

#[inline]
fn parent<K, N>(arena: &[N], i: u32) -> Option<u32>
where
    N: RbNodeLike<K>,
{
    arena[i as usize].p()
}

#[inline]
fn set_p<K, N>(arena: &mut [N], i: u32, v: Option<u32>)
where
    N: RbNodeLike<K>,
{
    arena[i as usize].set_p(v);
}

/// Color of a possibly absent node; absent children are black.
#[inline]
fn color<K, N>(arena: &[N], n: Option<u32>) -> Color
where
    N: RbNodeLike<K>,
{
    n.map_or(Color::Black, |i| arena[i as usize].color())
}

#[inline]
fn paint<K, N>(arena: &mut [N], i: u32, c: Color)
where
    N: RbNodeLike<K>,
{
    arena[i as usize].set_color(c);
}

#[inline]
fn key<K, N>(arena: &[N], i: u32) -> K
where
    K: Clone,
    N: RbNodeLike<K>,
{
    arena[i as usize].key().clone()
}

/// Points `parent`'s link (or the root) that held `old` at `new`.
fn replace_child<K, N>(
    arena: &mut [N],
    root: &mut Option<u32>,
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) where
    N: RbNodeLike<K>,
{
    match parent {
        None => *root = new,
        Some(p) => {
            if get_l(arena, p) == Some(old) {
                set_l(arena, p, new);
            } else {
                set_r(arena, p, new);
            }
        }
    }
}

fn l_rotate<K, N>(arena: &mut [N], root: &mut Option<u32>, x: u32, narration: &mut Narration<K>)
where
    K: Clone + Debug,
    N: RbNodeLike<K>,
{
    let Some(y) = get_r(arena, x) else {
        return;
    };
    narration.note(TreeEvent::RotateLeft { at: key(arena, x) });

    let yl = get_l(arena, y);
    set_r(arena, x, yl);
    if let Some(yl) = yl {
        set_p(arena, yl, Some(x));
    }
    let xp = parent(arena, x);
    set_p(arena, y, xp);
    replace_child(arena, root, xp, x, Some(y));
    set_l(arena, y, Some(x));
    set_p(arena, x, Some(y));
}

fn r_rotate<K, N>(arena: &mut [N], root: &mut Option<u32>, y: u32, narration: &mut Narration<K>)
where
    K: Clone + Debug,
    N: RbNodeLike<K>,
{
    let Some(x) = get_l(arena, y) else {
        return;
    };
    narration.note(TreeEvent::RotateRight { at: key(arena, y) });

    let xr = get_r(arena, x);
    set_l(arena, y, xr);
    if let Some(xr) = xr {
        set_p(arena, xr, Some(y));
    }
    let yp = parent(arena, y);
    set_p(arena, x, yp);
    replace_child(arena, root, yp, y, Some(x));
    set_r(arena, x, Some(y));
    set_p(arena, y, Some(x));
}

/// Hangs red node `z` under `root` and runs the insert fixup. Returns the new
/// root.
pub fn insert<K, N>(
    arena: &mut [N],
    root: Option<u32>,
    z: u32,
    narration: &mut Narration<K>,
) -> Option<u32>
where
    K: PartialOrd + Clone + Debug,
    N: RbNodeLike<K>,
{
    let mut root = root;
    let mut y = None;
    let mut x = root;
    while let Some(xi) = x {
        y = Some(xi);
        x = if arena[z as usize].key() < arena[xi as usize].key() {
            get_l(arena, xi)
        } else {
            get_r(arena, xi)
        };
    }

    set_p(arena, z, y);
    set_l(arena, z, None);
    set_r(arena, z, None);
    paint(arena, z, Color::Red);
    match y {
        None => root = Some(z),
        Some(yi) => {
            if arena[z as usize].key() < arena[yi as usize].key() {
                set_l(arena, yi, Some(z));
            } else {
                set_r(arena, yi, Some(z));
            }
        }
    }

    insert_fixup(arena, &mut root, z, narration);
    root
}

fn insert_fixup<K, N>(
    arena: &mut [N],
    root: &mut Option<u32>,
    mut z: u32,
    narration: &mut Narration<K>,
) where
    K: Clone + Debug,
    N: RbNodeLike<K>,
{
    loop {
        let Some(zp) = parent(arena, z) else {
            break;
        };
        if color(arena, Some(zp)) != Color::Red {
            break;
        }
        let Some(g) = parent(arena, zp) else {
            break;
        };

        let parent_is_left = get_l(arena, g) == Some(zp);
        let uncle = if parent_is_left {
            get_r(arena, g)
        } else {
            get_l(arena, g)
        };

        if let Some(u) = uncle.filter(|&u| arena[u as usize].color() == Color::Red) {
            narration.note(TreeEvent::RecolorUp {
                parent: key(arena, zp),
                uncle: key(arena, u),
                grandparent: key(arena, g),
            });
            paint(arena, zp, Color::Black);
            paint(arena, u, Color::Black);
            paint(arena, g, Color::Red);
            z = g;
            continue;
        }

        let inner = if parent_is_left {
            get_r(arena, zp) == Some(z)
        } else {
            get_l(arena, zp) == Some(z)
        };
        if inner {
            narration.note(TreeEvent::Triangle {
                node: key(arena, z),
                parent: key(arena, zp),
            });
            z = zp;
            if parent_is_left {
                l_rotate(arena, root, z, narration);
            } else {
                r_rotate(arena, root, z, narration);
            }
        }

        let Some(zp) = parent(arena, z) else {
            break;
        };
        let Some(g) = parent(arena, zp) else {
            break;
        };
        narration.note(TreeEvent::Line {
            parent: key(arena, zp),
            grandparent: key(arena, g),
        });
        paint(arena, zp, Color::Black);
        paint(arena, g, Color::Red);
        if parent_is_left {
            r_rotate(arena, root, g, narration);
        } else {
            l_rotate(arena, root, g, narration);
        }
    }

    if let Some(r) = *root {
        if arena[r as usize].color() != Color::Black {
            narration.note(TreeEvent::ForceRootBlack { key: key(arena, r) });
            paint(arena, r, Color::Black);
        }
    }
}

fn transplant<K, N>(arena: &mut [N], root: &mut Option<u32>, u: u32, v: Option<u32>)
where
    N: RbNodeLike<K>,
{
    let up = parent(arena, u);
    replace_child(arena, root, up, u, v);
    if let Some(v) = v {
        set_p(arena, v, up);
    }
}

/// Unlinks node `z` and restores the red-black invariants. Returns the new
/// root. `z` stays in the arena, detached.
pub fn remove<K, N>(
    arena: &mut [N],
    root: Option<u32>,
    z: u32,
    narration: &mut Narration<K>,
) -> Option<u32>
where
    K: Clone + Debug,
    N: RbNodeLike<K>,
{
    let mut root = root;
    let mut removed_color = arena[z as usize].color();
    let x: Option<u32>;
    let x_parent: Option<u32>;

    match (get_l(arena, z), get_r(arena, z)) {
        (None, zr) => {
            narration.note(TreeEvent::Transplant { key: key(arena, z) });
            x = zr;
            x_parent = parent(arena, z);
            transplant(arena, &mut root, z, zr);
        }
        (zl, None) => {
            narration.note(TreeEvent::Transplant { key: key(arena, z) });
            x = zl;
            x_parent = parent(arena, z);
            transplant(arena, &mut root, z, zl);
        }
        (Some(zl), Some(zr)) => {
            let y = first(arena, zr);
            removed_color = arena[y as usize].color();
            x = get_r(arena, y);
            if parent(arena, y) == Some(z) {
                x_parent = Some(y);
            } else {
                x_parent = parent(arena, y);
                transplant(arena, &mut root, y, x);
                set_r(arena, y, Some(zr));
                set_p(arena, zr, Some(y));
            }
            transplant(arena, &mut root, z, Some(y));
            set_l(arena, y, Some(zl));
            set_p(arena, zl, Some(y));
            let zc = arena[z as usize].color();
            paint(arena, y, zc);
            narration.note(TreeEvent::ReplacedWithSuccessor {
                key: key(arena, z),
                successor: key(arena, y),
            });
        }
    }

    set_p(arena, z, None);
    set_l(arena, z, None);
    set_r(arena, z, None);

    if removed_color == Color::Black {
        delete_fixup(arena, &mut root, x, x_parent, narration);
    }
    root
}

#[inline]
fn sibling_of<K, N>(arena: &[N], p: u32, x_is_left: bool) -> Option<u32>
where
    N: RbNodeLike<K>,
{
    if x_is_left {
        get_r(arena, p)
    } else {
        get_l(arena, p)
    }
}

/// Resolves the double-black deficiency sitting on `x` (possibly absent, in
/// which case `x_parent` locates it).
fn delete_fixup<K, N>(
    arena: &mut [N],
    root: &mut Option<u32>,
    mut x: Option<u32>,
    mut x_parent: Option<u32>,
    narration: &mut Narration<K>,
) where
    K: Clone + Debug,
    N: RbNodeLike<K>,
{
    while x != *root && color(arena, x) == Color::Black {
        let Some(p) = x_parent else {
            break;
        };
        let x_is_left = get_l(arena, p) == x;

        let Some(mut w) = sibling_of(arena, p, x_is_left) else {
            x = Some(p);
            x_parent = parent(arena, p);
            continue;
        };

        if arena[w as usize].color() == Color::Red {
            narration.note(TreeEvent::SiblingRed {
                sibling: key(arena, w),
                parent: key(arena, p),
            });
            paint(arena, w, Color::Black);
            paint(arena, p, Color::Red);
            if x_is_left {
                l_rotate(arena, root, p, narration);
            } else {
                r_rotate(arena, root, p, narration);
            }
            match sibling_of(arena, p, x_is_left) {
                Some(next) => w = next,
                None => {
                    x = Some(p);
                    x_parent = parent(arena, p);
                    continue;
                }
            }
        }

        let (near, far) = if x_is_left {
            (get_l(arena, w), get_r(arena, w))
        } else {
            (get_r(arena, w), get_l(arena, w))
        };

        if color(arena, near) == Color::Black && color(arena, far) == Color::Black {
            narration.note(TreeEvent::SiblingChildrenBlack {
                sibling: key(arena, w),
                parent: key(arena, p),
            });
            paint(arena, w, Color::Red);
            x = Some(p);
            x_parent = parent(arena, p);
            continue;
        }

        if color(arena, far) == Color::Black {
            if let Some(n) = near {
                narration.note(TreeEvent::InnerNephewRed {
                    sibling: key(arena, w),
                    nephew: key(arena, n),
                });
                paint(arena, n, Color::Black);
            }
            paint(arena, w, Color::Red);
            if x_is_left {
                r_rotate(arena, root, w, narration);
            } else {
                l_rotate(arena, root, w, narration);
            }
            let Some(next) = sibling_of(arena, p, x_is_left) else {
                break;
            };
            w = next;
        }

        let far = if x_is_left {
            get_r(arena, w)
        } else {
            get_l(arena, w)
        };
        let pc = arena[p as usize].color();
        paint(arena, w, pc);
        paint(arena, p, Color::Black);
        if let Some(f) = far {
            narration.note(TreeEvent::OuterNephewRed {
                sibling: key(arena, w),
                nephew: key(arena, f),
                parent: key(arena, p),
            });
            paint(arena, f, Color::Black);
        }
        if x_is_left {
            l_rotate(arena, root, p, narration);
        } else {
            r_rotate(arena, root, p, narration);
        }
        x = *root;
        x_parent = None;
    }

    if let Some(xi) = x {
        if arena[xi as usize].color() != Color::Black {
            narration.note(TreeEvent::ClearDoubleBlack { key: key(arena, xi) });
            paint(arena, xi, Color::Black);
        }
    }
}

/// Checks the red-black rules: black root, no red node with a red child,
/// equal black-height on every root-to-leaf path. Parent links are checked
/// too. Every violation found is reported, not just the first.
pub fn check_validity<K, N>(arena: &[N], root: Option<u32>) -> Validity
where
    K: Debug,
    N: RbNodeLike<K>,
{
    let mut problems = Vec::new();
    let Some(r) = root else {
        return Validity::from_problems(problems);
    };

    if arena[r as usize].color() != Color::Black {
        problems.push("Root is not black".to_string());
    }
    if parent(arena, r).is_some() {
        problems.push("Root has parent".to_string());
    }

    // Absent children count as one black leaf.
    let mut black_heights = Vec::new();
    let mut stack: Vec<(Option<u32>, usize, Option<u32>)> = vec![(Some(r), 0, None)];
    while let Some((node, count, par)) = stack.pop() {
        let Some(i) = node else {
            black_heights.push(count + 1);
            continue;
        };
        let c = arena[i as usize].color();
        if c == Color::Red {
            if let Some(pi) = par.filter(|&pi| arena[pi as usize].color() == Color::Red) {
                problems.push(format!(
                    "Red node {:?} has red parent {:?}",
                    arena[i as usize].key(),
                    arena[pi as usize].key()
                ));
            }
        }
        for child in [get_l(arena, i), get_r(arena, i)].into_iter().flatten() {
            if parent(arena, child) != Some(i) {
                problems.push(format!(
                    "Broken parent link under {:?}",
                    arena[i as usize].key()
                ));
            }
        }
        let add = usize::from(c == Color::Black);
        stack.push((get_r(arena, i), count + add, Some(i)));
        stack.push((get_l(arena, i), count + add, Some(i)));
    }

    let min = black_heights.iter().copied().min().unwrap_or(0);
    let max = black_heights.iter().copied().max().unwrap_or(0);
    if min != max {
        problems.push(format!(
            "Black-height mismatch: min {min}, max {max} (should be equal)"
        ));
    }

    Validity::from_problems(problems)
}
