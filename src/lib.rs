//! This crate exposes a self-balancing Binary Search Tree, specifically a
//! left-leaning red-black tree (LLRB).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores a value and will sometimes
//! have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than or equal to its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). Inserting values in
//! sorted order into a naive BST produces a linked list with `height == N`.
//!
//! ## Left-Leaning Red-Black Trees
//!
//! An LLRB simulates a 2-3 tree with a binary structure. Every link between a
//! parent and a child is colored red or black. A red link glues the child to its
//! parent so the pair behaves like one 3-node; a black link is an ordinary edge.
//! On top of the BST invariants the tree keeps:
//!
//! 1. Red links only ever lean left.
//! 2. No path has two red links in a row.
//! 3. Every path from the root to an empty link crosses the same number of black
//!    links.
//!
//! Together these bound the height by `2 * lg(N + 1)`. Insertion restores them
//! with three local fix-ups (rotate left, rotate right, flip colors) applied on
//! the way back up from the new leaf.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod llrb;
