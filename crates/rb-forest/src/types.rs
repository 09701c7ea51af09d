//! Link record and arena abstractions.
//!
//! Nodes never own each other through Rust references. Every "pointer" is an
//! `Option<u32>` index into a caller-owned arena, and the engine reaches the
//! links through [`LinkStore`]. An owner record embeds one [`RbLink`] per
//! index it participates in.

/// Node color. Absent (nil) positions are treated as [`Color::Black`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Black => "black",
        }
    }
}

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Intrusive linkage: color, parent, left, right. Carries no payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RbLink {
    pub color: Color,
    /// Parent (back-reference), `None` for the root.
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
}

impl RbLink {
    /// A fresh, unlinked, red link.
    pub const fn new() -> Self {
        Self {
            color: Color::Red,
            p: None,
            l: None,
            r: None,
        }
    }

    #[inline]
    pub fn child(&self, side: Side) -> Option<u32> {
        match side {
            Side::Left => self.l,
            Side::Right => self.r,
        }
    }

    #[inline]
    pub fn set_child(&mut self, side: Side, v: Option<u32>) {
        match side {
            Side::Left => self.l = v,
            Side::Right => self.r = v,
        }
    }

    /// Resets the link to the state of [`RbLink::new`].
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for RbLink {
    fn default() -> Self {
        Self::new()
    }
}

/// Implemented by owner records to expose their embedded link.
pub trait RbNode {
    fn link(&self) -> &RbLink;
    fn link_mut(&mut self) -> &mut RbLink;
}

impl RbNode for RbLink {
    fn link(&self) -> &RbLink {
        self
    }

    fn link_mut(&mut self) -> &mut RbLink {
        self
    }
}

/// Index-addressed access to the links of one tree.
///
/// Blanket implementations cover `[N]` and `Vec<N>` for any `N: RbNode`.
/// Records embedding several links implement this on a view type per index.
pub trait LinkStore {
    fn link(&self, i: u32) -> &RbLink;
    fn link_mut(&mut self, i: u32) -> &mut RbLink;
}

impl<N: RbNode> LinkStore for [N] {
    #[inline]
    fn link(&self, i: u32) -> &RbLink {
        self[i as usize].link()
    }

    #[inline]
    fn link_mut(&mut self, i: u32) -> &mut RbLink {
        self[i as usize].link_mut()
    }
}

impl<N: RbNode> LinkStore for Vec<N> {
    #[inline]
    fn link(&self, i: u32) -> &RbLink {
        self[i as usize].link()
    }

    #[inline]
    fn link_mut(&mut self, i: u32) -> &mut RbLink {
        self[i as usize].link_mut()
    }
}

/// Tree handle: the root index, or `None` for an empty tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RbRoot {
    pub node: Option<u32>,
}

impl RbRoot {
    pub const fn new() -> Self {
        Self { node: None }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.node.is_none()
    }
}

#[inline]
pub(crate) fn get_p<S: LinkStore + ?Sized>(store: &S, i: u32) -> Option<u32> {
    store.link(i).p
}

#[inline]
pub(crate) fn get_l<S: LinkStore + ?Sized>(store: &S, i: u32) -> Option<u32> {
    store.link(i).l
}

#[inline]
pub(crate) fn get_r<S: LinkStore + ?Sized>(store: &S, i: u32) -> Option<u32> {
    store.link(i).r
}

#[inline]
pub(crate) fn get_child<S: LinkStore + ?Sized>(store: &S, i: u32, side: Side) -> Option<u32> {
    store.link(i).child(side)
}

#[inline]
pub(crate) fn set_p<S: LinkStore + ?Sized>(store: &mut S, i: u32, v: Option<u32>) {
    store.link_mut(i).p = v;
}

#[inline]
pub(crate) fn set_child<S: LinkStore + ?Sized>(store: &mut S, i: u32, side: Side, v: Option<u32>) {
    store.link_mut(i).set_child(side, v);
}

#[inline]
pub(crate) fn color_of<S: LinkStore + ?Sized>(store: &S, i: u32) -> Color {
    store.link(i).color
}

#[inline]
pub(crate) fn set_color<S: LinkStore + ?Sized>(store: &mut S, i: u32, color: Color) {
    store.link_mut(i).color = color;
}

/// `true` only for a present node colored red.
#[inline]
pub fn is_red<S: LinkStore + ?Sized>(store: &S, node: Option<u32>) -> bool {
    node.is_some_and(|i| store.link(i).color == Color::Red)
}

/// `true` for a black node or an absent (nil) position.
#[inline]
pub fn is_black<S: LinkStore + ?Sized>(store: &S, node: Option<u32>) -> bool {
    !is_red(store, node)
}

/// Side of `parent` that `node` hangs on.
///
/// Panics if `node` is not a child of `parent`.
#[inline]
pub(crate) fn side_of<S: LinkStore + ?Sized>(store: &S, parent: u32, node: Option<u32>) -> Side {
    let link = store.link(parent);
    if link.l == node {
        Side::Left
    } else {
        assert!(link.r == node, "node is not a child of its recorded parent");
        Side::Right
    }
}
