//! Intrusive, arena-indexed red-black tree.
//!
//! The tree owns nothing but links. Owner records embed an [`RbLink`] (one
//! per index they take part in) and live in a caller-owned arena; every
//! "pointer" is an `Option<u32>` index into that arena. The engine reaches
//! the links through [`LinkStore`], so one record type can sit in several
//! trees at once.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Color`], [`Side`], [`RbLink`], [`RbNode`], [`LinkStore`], [`RbRoot`] |
//! | [`red_black`] | transplant, rotations, insert / remove and their fixups |
//! | [`keyed`] | ordered slot search on top of the engine |
//! | [`util`] | in-order navigation, size, height |
//! | [`validate`](mod@validate) | invariant checker |
//! | [`print`] | debug dumps |
//!
//! ```
//! use rb_forest::{keyed, red_black, RbLink, RbNode, RbRoot};
//!
//! struct Job {
//!     deadline: u64,
//!     link: RbLink,
//! }
//!
//! impl RbNode for Job {
//!     fn link(&self) -> &RbLink {
//!         &self.link
//!     }
//!     fn link_mut(&mut self) -> &mut RbLink {
//!         &mut self.link
//!     }
//! }
//!
//! let mut jobs: Vec<Job> = [30, 10, 20]
//!     .into_iter()
//!     .map(|deadline| Job { deadline, link: RbLink::new() })
//!     .collect();
//! let mut root = RbRoot::new();
//! for i in 0..jobs.len() as u32 {
//!     keyed::insert_by(&mut jobs, &mut root, i, |j: &Job| &j.deadline, u64::cmp);
//! }
//! assert_eq!(root.node, Some(2));
//!
//! red_black::remove(&mut jobs, &mut root, 2);
//! assert!(!root.is_empty());
//! ```

pub mod keyed;
pub mod print;
pub mod red_black;
pub mod types;
pub mod util;
pub mod validate;

pub use red_black::{insert, remove};
pub use types::{is_black, is_red, Color, LinkStore, RbLink, RbNode, RbRoot, Side};
pub use util::{first, last, next, prev, InOrder};
pub use validate::{validate, validate_by, validate_colors, ValidationError, ValidationReport};
