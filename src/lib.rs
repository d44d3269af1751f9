//! An in-memory ordered set of `i64` keys, implemented as a red-black tree
//! over a generational arena.
//!
//! Search, insertion and removal are logarithmic in the number of stored
//! keys regardless of insertion order; duplicates are silently ignored.
//! Nodes refer to each other by arena index rather than by pointer, so the
//! parent/child graph stays safe Rust throughout and structural bugs show
//! up as panics on stale indices instead of undefined behavior.
//!
//! Insertions restore the red-black invariants with the usual recolor and
//! rotation fixup. Removals do not: a removed node is spliced out (or
//! replaced by its in-order successor) without rebalancing, which preserves
//! key order and link consistency but may leave paths with unequal black
//! heights. The [`Tree::validate`] family of checks exists to verify all of
//! this in tests.
//!
//! ```
//! use red_black_tree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//!
//! assert!(tree.contains(2));
//! assert_eq!(tree.iter().collect::<Vec<i64>>(), vec![1, 2, 3]);
//!
//! assert!(tree.remove(3));
//! assert!(!tree.contains(3));
//! ```
//!
//! The tree is single-threaded; callers sharing one across threads must
//! serialize access themselves.

mod balance;
mod iter;
mod tree;
mod validate;

pub use crate::iter::Iter;
pub use crate::tree::Tree;
