//! Red-black rebalancing engine.
//!
//! Callers link a node through [`insert`] (after locating the slot with their
//! own ordering) and unlink it through [`remove`]. The rotations and both
//! fixup passes are public for callers building other balanced structures
//! on the same links.

pub mod insert;
pub mod primitives;
pub mod remove;

pub use insert::{fixup_after_insert, insert};
pub use primitives::{rotate, rotate_left, rotate_right, transplant};
pub use remove::{fixup_after_remove, remove};
