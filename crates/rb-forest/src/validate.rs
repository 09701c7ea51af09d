//! Invariant checker.
//!
//! Walks a tree without mutating it and reports the first broken red-black
//! invariant. Used by the test driver after every operation.

use std::cmp::Ordering;

use thiserror::Error;

use crate::types::{is_red, Color, LinkStore, RbNode, RbRoot};
use crate::util::InOrder;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("root node {node} has a parent")]
    RootHasParent { node: u32 },
    #[error("root node {node} is not black")]
    RootNotBlack { node: u32 },
    #[error("node {node} does not point back at its parent")]
    BrokenParentLink { node: u32 },
    #[error("red node {node} has a red parent")]
    RedAdjacency { node: u32 },
    #[error("black height below node {node} is {found}, expected {expected}")]
    BlackHeightMismatch {
        node: u32,
        expected: usize,
        found: usize,
    },
    #[error("node {node} is ordered before its in-order predecessor")]
    OrderViolation { node: u32 },
}

/// Shape of a tree that passed validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub size: usize,
    pub height: usize,
    /// Black nodes on every root-to-nil path, root included.
    pub black_height: usize,
}

/// Checks parent links, root color, red adjacency and black heights.
pub fn validate_colors<S>(store: &S, root: &RbRoot) -> Result<ValidationReport, ValidationError>
where
    S: LinkStore + ?Sized,
{
    let Some(top) = root.node else {
        return Ok(ValidationReport::default());
    };
    if store.link(top).p.is_some() {
        return Err(ValidationError::RootHasParent { node: top });
    }
    if store.link(top).color != Color::Black {
        return Err(ValidationError::RootNotBlack { node: top });
    }

    let mut report = ValidationReport::default();
    let mut expected: Option<usize> = None;
    // (node, depth, black nodes from the root down to and including node)
    let mut stack = vec![(top, 1usize, 1usize)];
    while let Some((node, depth, blacks)) = stack.pop() {
        report.size += 1;
        report.height = report.height.max(depth);
        let link = store.link(node);

        for child in [link.l, link.r] {
            let Some(c) = child else {
                match expected {
                    None => expected = Some(blacks),
                    Some(e) if e != blacks => {
                        return Err(ValidationError::BlackHeightMismatch {
                            node,
                            expected: e,
                            found: blacks,
                        });
                    }
                    Some(_) => {}
                }
                continue;
            };
            let child_link = store.link(c);
            if child_link.p != Some(node) {
                return Err(ValidationError::BrokenParentLink { node: c });
            }
            if link.color == Color::Red && is_red(store, Some(c)) {
                return Err(ValidationError::RedAdjacency { node: c });
            }
            let child_blacks = blacks + usize::from(child_link.color == Color::Black);
            stack.push((c, depth + 1, child_blacks));
        }
    }
    report.black_height = expected.unwrap_or(0);
    Ok(report)
}

/// Full check: [`validate_colors`] plus in-order key ordering.
///
/// `cmp(a, b)` orders node `a` against node `b`. Equal neighbours are
/// accepted.
pub fn validate<S, C>(
    store: &S,
    root: &RbRoot,
    mut cmp: C,
) -> Result<ValidationReport, ValidationError>
where
    S: LinkStore + ?Sized,
    C: FnMut(u32, u32) -> Ordering,
{
    let report = validate_colors(store, root)?;
    let mut prev: Option<u32> = None;
    for node in InOrder::new(store, root.node) {
        if let Some(p) = prev {
            if cmp(p, node) == Ordering::Greater {
                return Err(ValidationError::OrderViolation { node });
            }
        }
        prev = Some(node);
    }
    Ok(report)
}

/// [`validate`] for an arena of keyed records.
pub fn validate_by<N, K, F, C>(
    arena: &[N],
    root: &RbRoot,
    key_of: F,
    cmp: C,
) -> Result<ValidationReport, ValidationError>
where
    N: RbNode,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    validate(arena, root, |a, b| {
        cmp(key_of(&arena[a as usize]), key_of(&arena[b as usize]))
    })
}
