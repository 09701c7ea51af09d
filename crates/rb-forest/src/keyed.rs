//! Keyed descent on top of the engine.
//!
//! The engine never compares anything. These helpers run the ordinary BST
//! descent that picks the slot for [`crate::red_black::insert`], and the
//! matching lookup. Equal keys descend to the right, so duplicates are kept
//! in insertion order.

use std::cmp::Ordering;

use crate::red_black::insert;
use crate::types::{get_child, LinkStore, RbNode, RbRoot, Side};

/// Finds the empty slot where a key belongs.
///
/// `probe(i)` orders the sought key against node `i`. Returns the parent of
/// the slot (or `None` for the root slot of an empty tree) and the side.
pub fn find_slot<S, F>(store: &S, root: &RbRoot, mut probe: F) -> (Option<u32>, Side)
where
    S: LinkStore + ?Sized,
    F: FnMut(u32) -> Ordering,
{
    let mut parent = None;
    let mut side = Side::Left;
    let mut curr = root.node;
    while let Some(i) = curr {
        side = match probe(i) {
            Ordering::Less => Side::Left,
            Ordering::Equal | Ordering::Greater => Side::Right,
        };
        parent = Some(i);
        curr = get_child(store, i, side);
    }
    (parent, side)
}

/// Finds some node whose key compares equal under `probe`.
pub fn find<S, F>(store: &S, root: &RbRoot, mut probe: F) -> Option<u32>
where
    S: LinkStore + ?Sized,
    F: FnMut(u32) -> Ordering,
{
    let mut curr = root.node;
    while let Some(i) = curr {
        curr = match probe(i) {
            Ordering::Equal => return Some(i),
            Ordering::Less => get_child(store, i, Side::Left),
            Ordering::Greater => get_child(store, i, Side::Right),
        };
    }
    None
}

/// Links `node` into its ordered position and rebalances.
pub fn insert_by<N, K, F, C>(arena: &mut [N], root: &mut RbRoot, node: u32, key_of: F, cmp: C)
where
    N: RbNode,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    let (parent, side) = {
        let records = &*arena;
        let key = key_of(&records[node as usize]);
        find_slot(records, root, |i| cmp(key, key_of(&records[i as usize])))
    };
    insert(arena, root, node, parent, side);
}

/// Looks a key up in an arena of records.
pub fn find_by<N, K, F, C>(arena: &[N], root: &RbRoot, key: &K, key_of: F, cmp: C) -> Option<u32>
where
    N: RbNode,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    find(arena, root, |i| cmp(key, key_of(&arena[i as usize])))
}
