//! Property tests that only use the public API of the tree.

mod tree;

/// The largest height a tree of `len` values may have: `2 * ceil(lg(len + 1))`.
fn height_bound(len: usize) -> usize {
    2 * (usize::BITS - len.leading_zeros()) as usize
}
