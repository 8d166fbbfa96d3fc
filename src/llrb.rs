//! A left-leaning red-black tree. Each link is owned by exactly one parent so
//! rebalancing is done by handing subtrees down the recursion by value and
//! getting the (possibly new) subtree root back.
//!
//! # Examples
//!
//! ```
//! use llrb::llrb::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//!
//! // Ascending inserts would degrade a naive BST into a list. Not this one.
//! for x in 2..=1000 {
//!     tree.insert(x);
//! }
//! assert!(tree.height() <= 20);
//!
//! // `search` also reports how many nodes the lookup visited.
//! let search = tree.search(&1000);
//! assert!(search.found);
//! assert!(search.depth <= tree.height());
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;

use log::trace;

/// The color of the link between a node and its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

type Link<T> = Option<Box<Node<T>>>;

fn is_red<T>(link: &Link<T>) -> bool {
    link.as_ref().map_or(false, |node| node.color == Color::Red)
}

/// A self-balancing Binary Search Tree (specifically, a left-leaning red-black tree). This can be
/// used for inserting values and checking whether a value is present.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

/// The outcome of [`Tree::search`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Search {
    /// Whether a value equal to the probe is in the tree.
    pub found: bool,
    /// How many nodes were compared against the probe before the search stopped.
    pub depth: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns how many values have been inserted. Duplicates are counted each time.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::llrb::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(7);
    /// tree.insert(7);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Gets the number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0. This walks the whole tree so it is `O(N)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::llrb::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// for x in 1..=7 {
    ///     tree.insert(x);
    /// }
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Inserts the given value into the tree.
    ///
    /// Inserting a value equal to one already present is accepted: the search for its position
    /// goes left on ties, so the new node lands in the left subtree of the first equal node it
    /// meets. Later rotations may move equal values around, but every copy stays reachable
    /// and in-order position is preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::llrb::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert!(tree.contains(&1));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut root = Node::insert(self.root.take(), value);
        root.color = Color::Black;
        self.root = Some(root);
        self.len += 1;
    }

    /// Returns `true` if the tree holds a value equal to `value`.
    ///
    /// The number of nodes visited is emitted as a `trace` log record. Use [`Tree::search`] to
    /// get it back directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::llrb::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(String::from("red"));
    ///
    /// assert!(tree.contains("red"));
    /// assert!(!tree.contains("black"));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let search = self.search(value);
        trace!(
            "lookup {} after visiting {} nodes",
            if search.found { "hit" } else { "missed" },
            search.depth
        );
        search.found
    }

    /// Looks for `value` and reports whether it was found along with how many nodes were visited
    /// on the way. Lookups never visit more than [`Tree::height`] nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::llrb::{Search, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.search(&5), Search { found: false, depth: 0 });
    ///
    /// tree.insert(5);
    /// assert_eq!(tree.search(&5), Search { found: true, depth: 1 });
    /// assert_eq!(tree.search(&3), Search { found: false, depth: 1 });
    /// ```
    pub fn search<Q>(&self, value: &Q) -> Search
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        let mut depth = 0;
        while let Some(node) = current {
            depth += 1;
            current = match value.cmp(node.value.borrow()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Search { found: true, depth },
                Ordering::Greater => node.right.as_deref(),
            };
        }

        Search {
            found: false,
            depth,
        }
    }
}

fn height<T>(link: &Link<T>) -> usize {
    link.as_ref()
        .map_or(0, |node| height(&node.left).max(height(&node.right)) + 1)
}

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    /// Color of the link from this node's parent.
    color: Color,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    /// New nodes always join their parent with a red link.
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            color: Color::Red,
            left: None,
            right: None,
        })
    }

    /// Inserts `value` into the subtree at `link` and returns the root of the rebalanced subtree.
    fn insert(link: Link<T>, value: T) -> Box<Self>
    where
        T: Ord,
    {
        match link {
            None => Self::new_boxed(value),
            Some(mut node) => {
                if value <= node.value {
                    node.left = Some(Self::insert(node.left.take(), value));
                } else {
                    node.right = Some(Self::insert(node.right.take(), value));
                }
                Self::balance(node)
            }
        }
    }

    /// Restores the LLRB shape at `node` after one of its subtrees changed. The order of the
    /// three steps matters: each one can set up the condition the next one fixes.
    fn balance(mut node: Box<Self>) -> Box<Self> {
        if is_red(&node.right) && !is_red(&node.left) {
            node = Self::rotate_left(node);
        }

        let two_reds_on_left = node
            .left
            .as_ref()
            .map_or(false, |left| left.color == Color::Red && is_red(&left.left));
        if two_reds_on_left {
            node = Self::rotate_right(node);
        }

        if is_red(&node.left) && is_red(&node.right) {
            node.flip_colors();
        }

        // In tests, after balancing, assert that no red link leans right. Two reds on the left
        // can remain here; the parent's `balance` deals with those.
        if cfg!(test) {
            assert!(!is_red(&node.right));
        }
        node
    }

    /// Rotates the right child up to become the subtree root. The old root becomes its left
    /// child, and the red link now leans left.
    fn rotate_left(mut node: Box<Self>) -> Box<Self> {
        match node.right.take() {
            // `balance` only rotates left with a red (so present) right child.
            None => node,
            Some(mut new_root) => {
                node.right = new_root.left.take();
                new_root.color = node.color;
                node.color = Color::Red;
                new_root.left = Some(node);
                new_root
            }
        }
    }

    /// Rotates the left child up to become the subtree root. The old root becomes its right
    /// child.
    fn rotate_right(mut node: Box<Self>) -> Box<Self> {
        match node.left.take() {
            None => node,
            Some(mut new_root) => {
                node.left = new_root.right.take();
                new_root.color = node.color;
                node.color = Color::Red;
                new_root.right = Some(node);
                new_root
            }
        }
    }

    /// Splits a temporary 4-node by passing the red link up to the parent.
    fn flip_colors(&mut self) {
        self.color = Color::Red;
        if let Some(left) = self.left.as_mut() {
            left.color = Color::Black;
        }
        if let Some(right) = self.right.as_mut() {
            right.color = Color::Black;
        }
    }
}
