//! Structural primitives: transplant and the two rotations.
//!
//! These are the only functions that rewrite parent/child edges. They never
//! look at colors and never call back into the fixup code.

use crate::types::{get_child, get_p, set_child, set_p, side_of, LinkStore, RbRoot, Side};

/// Puts `new` in the slot `old` occupies (root, left or right child of its
/// parent) and points `new` back at `old`'s parent.
///
/// `old`'s own links and `new`'s children are left untouched.
pub fn transplant<S>(store: &mut S, root: &mut RbRoot, old: u32, new: Option<u32>)
where
    S: LinkStore + ?Sized,
{
    let parent = get_p(store, old);
    match parent {
        None => {
            assert_eq!(root.node, Some(old), "parentless node is not the tree root");
            root.node = new;
        }
        Some(p) => {
            let side = side_of(store, p, Some(old));
            set_child(store, p, side, new);
        }
    }
    if let Some(n) = new {
        set_p(store, n, parent);
    }
}

/// Rotates the subtree rooted at `x` so that `x` moves down to its `toward`
/// side and its child on the opposite side takes its place.
///
/// ```text
///   rotate(x, Left):
///
///         p                 p
///         |                 |
///         x                 y
///        / \               / \
///       a   y      ==>    x   c
///          / \           / \
///        (b)  c         a  (b)
/// ```
///
/// Panics if `x` has no child on the side opposite to `toward`.
pub fn rotate<S>(store: &mut S, root: &mut RbRoot, x: u32, toward: Side)
where
    S: LinkStore + ?Sized,
{
    let away = toward.opposite();
    let y = get_child(store, x, away).expect("rotation pivot has no child to promote");
    let b = get_child(store, y, toward);

    transplant(store, root, x, Some(y));

    set_child(store, y, toward, Some(x));
    set_p(store, x, Some(y));

    set_child(store, x, away, b);
    if let Some(b) = b {
        set_p(store, b, Some(x));
    }
}

/// Promotes `x.r` into `x`'s position. Panics if `x.r` is absent.
#[inline]
pub fn rotate_left<S>(store: &mut S, root: &mut RbRoot, x: u32)
where
    S: LinkStore + ?Sized,
{
    rotate(store, root, x, Side::Left);
}

/// Promotes `x.l` into `x`'s position. Panics if `x.l` is absent.
#[inline]
pub fn rotate_right<S>(store: &mut S, root: &mut RbRoot, x: u32)
where
    S: LinkStore + ?Sized,
{
    rotate(store, root, x, Side::Right);
}
