//! Read-only traversal helpers.
//!
//! Everything here is iterative, so depth is bounded by the heap rather than
//! the call stack.

use crate::types::{get_l, get_p, get_r, Color, LinkStore};

/// Leftmost node under `root`.
pub fn first<S: LinkStore + ?Sized>(store: &S, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(store, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last<S: LinkStore + ?Sized>(store: &S, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(store, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<S: LinkStore + ?Sized>(store: &S, node: u32) -> Option<u32> {
    if let Some(r) = get_r(store, node) {
        return first(store, Some(r));
    }
    let mut curr = node;
    let mut p = get_p(store, node);
    while let Some(pi) = p {
        if get_r(store, pi) == Some(curr) {
            curr = pi;
            p = get_p(store, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<S: LinkStore + ?Sized>(store: &S, node: u32) -> Option<u32> {
    if let Some(l) = get_l(store, node) {
        return last(store, Some(l));
    }
    let mut curr = node;
    let mut p = get_p(store, node);
    while let Some(pi) = p {
        if get_l(store, pi) == Some(curr) {
            curr = pi;
            p = get_p(store, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order walk over node indices.
pub struct InOrder<'a, S: LinkStore + ?Sized> {
    store: &'a S,
    curr: Option<u32>,
}

impl<'a, S: LinkStore + ?Sized> InOrder<'a, S> {
    pub fn new(store: &'a S, root: Option<u32>) -> Self {
        Self {
            store,
            curr: first(store, root),
        }
    }
}

impl<S: LinkStore + ?Sized> Iterator for InOrder<'_, S> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let curr = self.curr?;
        self.curr = next(self.store, curr);
        Some(curr)
    }
}

/// Number of nodes under `root`.
pub fn size<S: LinkStore + ?Sized>(store: &S, root: Option<u32>) -> usize {
    InOrder::new(store, root).count()
}

/// Number of nodes on the longest root-to-leaf path. `0` for an empty tree.
pub fn height<S: LinkStore + ?Sized>(store: &S, root: Option<u32>) -> usize {
    let mut max = 0;
    let mut stack: Vec<(u32, usize)> = root.map(|r| (r, 1)).into_iter().collect();
    while let Some((node, depth)) = stack.pop() {
        max = max.max(depth);
        let link = store.link(node);
        for child in [link.l, link.r].into_iter().flatten() {
            stack.push((child, depth + 1));
        }
    }
    max
}

/// Black nodes on the leftmost root-to-nil path, root included.
///
/// Equals the black height of every path when the tree is valid.
pub fn black_height<S: LinkStore + ?Sized>(store: &S, root: Option<u32>) -> usize {
    let mut count = 0;
    let mut curr = root;
    while let Some(i) = curr {
        let link = store.link(i);
        count += usize::from(link.color == Color::Black);
        curr = link.l;
    }
    count
}
