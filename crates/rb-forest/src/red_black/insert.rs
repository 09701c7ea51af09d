use crate::types::{
    color_of, get_child, get_p, is_red, set_child, set_color, side_of, Color, LinkStore, RbRoot,
    Side,
};

use super::primitives::rotate;

/// Links `node` as a red leaf into the empty slot `(parent, side)` and
/// rebalances.
///
/// `parent == None` addresses the root slot, in which case `side` is ignored
/// and the tree must be empty. The caller is responsible for choosing a slot
/// that keeps the keys ordered; see [`crate::keyed::insert_by`].
///
/// Panics if the slot is already occupied.
pub fn insert<S>(store: &mut S, root: &mut RbRoot, node: u32, parent: Option<u32>, side: Side)
where
    S: LinkStore + ?Sized,
{
    log::trace!("rb insert: node={node} parent={parent:?} side={side:?}");
    match parent {
        None => assert!(root.is_empty(), "root slot is already occupied"),
        Some(p) => assert!(
            get_child(store, p, side).is_none(),
            "child slot {side:?} of node {p} is already occupied"
        ),
    }

    let link = store.link_mut(node);
    link.clear();
    link.p = parent;

    match parent {
        None => root.node = Some(node),
        Some(p) => set_child(store, p, side, Some(node)),
    }

    fixup_after_insert(store, root, node);
}

/// Restores the red-black invariants after `node` was linked as a red leaf.
///
/// Walks upward while the current node's parent is red. The root is forced
/// black on exit.
pub fn fixup_after_insert<S>(store: &mut S, root: &mut RbRoot, mut node: u32)
where
    S: LinkStore + ?Sized,
{
    while let Some(mut parent) = get_p(store, node).filter(|&p| is_red(store, Some(p))) {
        debug_assert_eq!(color_of(store, node), Color::Red);
        // A red parent is never the root.
        let gparent = get_p(store, parent).expect("red parent has a parent");
        let parent_side = side_of(store, gparent, Some(parent));
        let uncle = get_child(store, gparent, parent_side.opposite());

        // Case 1: red uncle. Push the red up two levels.
        if let Some(uncle) = uncle.filter(|&u| is_red(store, Some(u))) {
            set_color(store, gparent, Color::Red);
            set_color(store, parent, Color::Black);
            set_color(store, uncle, Color::Black);
            node = gparent;
            continue;
        }

        // Case 2: inner grandchild. Turn it into the outer shape.
        if get_child(store, parent, parent_side.opposite()) == Some(node) {
            rotate(store, root, parent, parent_side);
            std::mem::swap(&mut parent, &mut node);
        }

        // Case 3: outer grandchild.
        rotate(store, root, gparent, parent_side.opposite());
        set_color(store, parent, Color::Black);
        set_color(store, gparent, Color::Red);
        break;
    }

    if let Some(r) = root.node {
        set_color(store, r, Color::Black);
    }
}
