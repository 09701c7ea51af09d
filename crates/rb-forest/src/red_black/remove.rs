use crate::types::{
    color_of, get_child, get_l, get_p, get_r, is_black, is_red, set_child, set_color, set_p,
    side_of, Color, LinkStore, RbRoot, Side,
};
use crate::util::first;

use super::primitives::{rotate, transplant};

/// Unlinks `node` from the tree and rebalances.
///
/// A node with two children is replaced by its in-order successor, which
/// takes over `node`'s color. The detached node's link is reset to a fresh
/// red, unlinked state; its storage stays with the caller.
///
/// Panics if `node` is not linked into the tree rooted at `root`.
pub fn remove<S>(store: &mut S, root: &mut RbRoot, node: u32)
where
    S: LinkStore + ?Sized,
{
    log::trace!("rb remove: node={node}");
    match get_p(store, node) {
        None => assert_eq!(root.node, Some(node), "node is not linked into this tree"),
        Some(p) => {
            side_of(store, p, Some(node));
        }
    }

    let l = get_l(store, node);
    let r = get_r(store, node);
    let mut removed_color = color_of(store, node);
    let replacement;
    let replacement_parent;

    match (l, r) {
        (None, _) => {
            replacement = r;
            replacement_parent = get_p(store, node);
            transplant(store, root, node, r);
        }
        (Some(_), None) => {
            replacement = l;
            replacement_parent = get_p(store, node);
            transplant(store, root, node, l);
        }
        (Some(l), Some(r)) => {
            let successor = first(store, Some(r)).expect("right subtree is not empty");
            replacement = get_r(store, successor);
            if successor != r {
                replacement_parent = get_p(store, successor);
                transplant(store, root, successor, replacement);
                set_child(store, successor, Side::Right, Some(r));
                set_p(store, r, Some(successor));
            } else {
                replacement_parent = Some(successor);
            }
            transplant(store, root, node, Some(successor));
            set_child(store, successor, Side::Left, Some(l));
            set_p(store, l, Some(successor));

            // The successor's own color is what actually left its position.
            removed_color = color_of(store, successor);
            let node_color = color_of(store, node);
            set_color(store, successor, node_color);
        }
    }

    store.link_mut(node).clear();

    if removed_color == Color::Black {
        fixup_after_remove(store, root, replacement, replacement_parent);
    }
}

/// Restores the red-black invariants after a black node left the position
/// now held by `node` under `parent`.
///
/// `node` may be `None`: the double-black position is then identified
/// through `parent` alone. A `node` that ends up red, or at the root, absorbs
/// the extra black.
pub fn fixup_after_remove<S>(
    store: &mut S,
    root: &mut RbRoot,
    mut node: Option<u32>,
    mut parent: Option<u32>,
) where
    S: LinkStore + ?Sized,
{
    while is_black(store, node) && node != root.node {
        let p = parent.expect("non-root position has a parent");
        debug_assert!(node.map_or(true, |n| get_p(store, n) == Some(p)));
        let side = side_of(store, p, node);
        let far = side.opposite();
        let mut sibling = get_child(store, p, far).expect("double-black position has a sibling");

        // Case 1: red sibling. Rotate it above the parent so the new sibling is black.
        if is_red(store, Some(sibling)) {
            debug_assert!(is_black(store, Some(p)));
            rotate(store, root, p, side);
            set_color(store, p, Color::Red);
            set_color(store, sibling, Color::Black);
            sibling = get_child(store, p, far).expect("red sibling had black children");
        }

        let near_nephew = get_child(store, sibling, side);
        let far_nephew = get_child(store, sibling, far);

        // Case 2: black sibling without red children. Push the deficit up.
        if is_black(store, near_nephew) && is_black(store, far_nephew) {
            set_color(store, sibling, Color::Red);
            node = Some(p);
            parent = get_p(store, p);
            continue;
        }

        // Case 3: only the near nephew is red. Rotate it into the far position.
        if is_black(store, far_nephew) {
            let near = near_nephew.expect("near nephew is red");
            set_color(store, near, Color::Black);
            set_color(store, sibling, Color::Red);
            rotate(store, root, sibling, far);
            sibling = near;
        }

        // Case 4: far nephew is red. One rotation at the parent settles it.
        let far_nephew = get_child(store, sibling, far).expect("far nephew is red");
        let parent_color = color_of(store, p);
        set_color(store, sibling, parent_color);
        set_color(store, p, Color::Black);
        set_color(store, far_nephew, Color::Black);
        rotate(store, root, p, side);
        break;
    }

    if let Some(n) = node {
        set_color(store, n, Color::Black);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::red_black::insert;
    use crate::types::RbLink;

    fn link(arena: &mut [RbLink], p: u32, c: u32, side: Side, color: Color) {
        arena[p as usize].set_child(side, Some(c));
        arena[c as usize].p = Some(p);
        arena[c as usize].color = color;
    }

    #[test]
    fn removing_only_node_empties_tree() {
        let mut arena = vec![RbLink::new()];
        let mut root = RbRoot::new();
        insert(&mut arena, &mut root, 0, None, Side::Left);
        remove(&mut arena, &mut root, 0);
        assert!(root.is_empty());
        assert_eq!(arena[0], RbLink::new());
    }

    #[test]
    fn removing_root_with_red_right_child() {
        // root=5(B) right=8(R); indices 0 and 1.
        let mut arena = vec![RbLink::new(); 2];
        let mut root = RbRoot::new();
        insert(&mut arena, &mut root, 0, None, Side::Left);
        insert(&mut arena, &mut root, 1, Some(0), Side::Right);
        remove(&mut arena, &mut root, 0);
        assert_eq!(root.node, Some(1));
        assert_eq!(arena[1].color, Color::Black);
        assert_eq!(arena[1].p, None);
    }

    #[test]
    fn red_leaf_removal_needs_no_fixup() {
        let mut arena = vec![RbLink::new(); 3];
        let mut root = RbRoot::new();
        arena[0].color = Color::Black;
        root.node = Some(0);
        link(&mut arena, 0, 1, Side::Left, Color::Red);
        link(&mut arena, 0, 2, Side::Right, Color::Red);
        remove(&mut arena, &mut root, 1);
        assert_eq!(arena[0].l, None);
        assert_eq!(arena[0].color, Color::Black);
        assert_eq!(arena[2].color, Color::Red);
    }

    #[test]
    fn black_leaf_with_black_sibling_recolors_sibling() {
        //      0(B)
        //     /    \
        //   1(B)   2(B)
        let mut arena = vec![RbLink::new(); 3];
        let mut root = RbRoot { node: Some(0) };
        arena[0].color = Color::Black;
        link(&mut arena, 0, 1, Side::Left, Color::Black);
        link(&mut arena, 0, 2, Side::Right, Color::Black);
        remove(&mut arena, &mut root, 1);
        assert_eq!(root.node, Some(0));
        assert_eq!(arena[0].color, Color::Black);
        assert_eq!(arena[2].color, Color::Red);
    }

    #[test]
    fn near_nephew_case_rotates_twice() {
        //      0(B)
        //     /    \
        //   1(B)   2(B)
        //          /
        //        3(R)
        let mut arena = vec![RbLink::new(); 4];
        let mut root = RbRoot { node: Some(0) };
        arena[0].color = Color::Black;
        link(&mut arena, 0, 1, Side::Left, Color::Black);
        link(&mut arena, 0, 2, Side::Right, Color::Black);
        link(&mut arena, 2, 3, Side::Left, Color::Red);
        remove(&mut arena, &mut root, 1);
        assert_eq!(root.node, Some(3));
        assert_eq!(arena[3].color, Color::Black);
        assert_eq!((arena[3].l, arena[3].r), (Some(0), Some(2)));
        assert_eq!(arena[0].color, Color::Black);
        assert_eq!(arena[2].color, Color::Black);
        assert_eq!(arena[0].l, None);
    }

    #[test]
    fn red_sibling_case() {
        //      0(B)
        //     /    \
        //   1(B)   2(R)
        //          /  \
        //        3(B) 4(B)
        let mut arena = vec![RbLink::new(); 5];
        let mut root = RbRoot { node: Some(0) };
        arena[0].color = Color::Black;
        link(&mut arena, 0, 1, Side::Left, Color::Black);
        link(&mut arena, 0, 2, Side::Right, Color::Red);
        link(&mut arena, 2, 3, Side::Left, Color::Black);
        link(&mut arena, 2, 4, Side::Right, Color::Black);
        remove(&mut arena, &mut root, 1);
        assert_eq!(root.node, Some(2));
        assert_eq!(arena[2].color, Color::Black);
        assert_eq!(arena[2].l, Some(0));
        assert_eq!(arena[0].color, Color::Black);
        assert_eq!(arena[0].r, Some(3));
        assert_eq!(arena[3].color, Color::Red);
        assert_eq!(arena[4].color, Color::Black);
    }

    #[test]
    fn successor_deep_in_right_subtree() {
        //        0(B)
        //       /    \
        //     1(B)   2(R)
        //           /    \
        //         3(B)   4(B)
        //           \
        //           5(R)
        let mut arena = vec![RbLink::new(); 6];
        let mut root = RbRoot { node: Some(0) };
        arena[0].color = Color::Black;
        link(&mut arena, 0, 1, Side::Left, Color::Black);
        link(&mut arena, 0, 2, Side::Right, Color::Red);
        link(&mut arena, 2, 3, Side::Left, Color::Black);
        link(&mut arena, 2, 4, Side::Right, Color::Black);
        link(&mut arena, 3, 5, Side::Right, Color::Red);
        // Successor of 0 is 3, two levels below 0's right child.
        remove(&mut arena, &mut root, 0);
        assert_eq!(root.node, Some(3));
        assert_eq!(arena[3].p, None);
        assert_eq!(arena[3].color, Color::Black);
        assert_eq!((arena[3].l, arena[3].r), (Some(1), Some(2)));
        assert_eq!(arena[1].p, Some(3));
        assert_eq!(arena[2].p, Some(3));
        // 5 moved into 3's old slot and absorbed the missing black.
        assert_eq!(arena[2].l, Some(5));
        assert_eq!(arena[5].p, Some(2));
        assert_eq!(arena[5].color, Color::Black);
        assert_eq!(arena[2].color, Color::Red);
        assert_eq!(arena[0], RbLink::new());
    }

    #[test]
    #[should_panic(expected = "not linked")]
    fn removing_unlinked_node_panics() {
        let mut arena = vec![RbLink::new(); 2];
        let mut root = RbRoot::new();
        insert(&mut arena, &mut root, 0, None, Side::Left);
        remove(&mut arena, &mut root, 1);
    }
}
