//! Ordered containers backed by a node-linked Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. It is defined recursively
//! using the notion of a `Node`: each node stores one element and up to two
//! child nodes. The invariants this crate maintains are:
//!
//! 1. For every node, all the nodes in its left subtree hold elements that
//!    compare less than its own element.
//! 2. For every node, all the nodes in its right subtree hold elements that
//!    compare greater than — or, when duplicates are permitted, equal to —
//!    its own element.
//! 3. Every non-root node points back at the node that owns it as a child,
//!    and the tree's length equals the number of reachable nodes.
//!
//! The first two invariants make every lookup `O(height)`; the third is what
//! powers the bidirectional [cursors][cursor]: stepping to the in-order
//! neighbor follows child and parent links alone, no auxiliary stack needed.
//! The tree is deliberately unbalanced — there is no rotation machinery —
//! so the height, and with it the cost of every operation, depends on
//! insertion order.
//!
//! ## Layout
//!
//! - [`tree::Tree`] is the core: ownership, insertion, the three-case
//!   removal splice, reconciling copies, constant-time swap and move-out.
//! - [`cursor`] holds the in-order cursor and iterator types.
//! - [`map::Map`] and [`set::Set`] are thin associative wrappers that
//!   forward to the tree.
//!
//! Operations that allocate return a [`Result`] and surface a failed node
//! allocation as [`Error::AllocationFailed`] rather than aborting.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod cursor;
mod error;
pub mod map;
pub mod set;
pub mod tree;

pub use error::Error;
