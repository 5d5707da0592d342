//! This crate implements a Binary Search Tree (BST) over a set of
//! distinct, ordered values, with explicit whole-tree rebalancing.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are defined recursively
//! using the notion of a `Node`: each `Node` stores one value and owns up
//! to two child `Node`s. The most important invariants of this tree are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than its own value, and all the `Node`s in its right subtree
//!    have a value greater than its own value.
//! 2. No value appears in the tree twice.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching a BST takes `O(height)`, where `height` is the longest path
//! from the root to a leaf, so a tree is only fast to search while its
//! height stays near `lg N`. [`tree::Tree::build`] guarantees that shape
//! up front by bisecting the sorted input, but insertions and deletions
//! make no attempt to keep it: a run of ascending inserts degrades the
//! tree toward a linked list. Instead of rebalancing on every mutation
//! the way an AVL or red-black tree would, this tree restores balance
//! only when asked, by flattening itself into sorted order and
//! rebuilding ([`tree::Tree::rebalance`]).
//!
//! The [`pretty`] module renders a tree's shape as indented text for
//! inspection; it sits on top of the read-only node accessors and is not
//! part of the tree's contract.

#![deny(missing_docs)]

pub mod pretty;
pub mod tree;
