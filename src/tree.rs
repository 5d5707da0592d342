//! An owned, mutable BST over a duplicate-free set of ordered values.
//!
//! The tree starts out height-balanced when built with [`Tree::build`] but
//! does not stay that way under mutation: `insert` and `delete` leave the
//! shape wherever the descent put it, and balance is only restored when the
//! caller asks for it with [`Tree::rebalance`].
//!
//! # Examples
//!
//! ```
//! use bstree::tree::Tree;
//!
//! let mut tree = Tree::build(vec![5, 3, 8, 1]);
//!
//! // Building sorts and deduplicates, so in-order is ascending.
//! assert_eq!(tree.in_order(), vec![&1, &3, &5, &8]);
//! assert!(tree.is_balanced());
//!
//! // Inserting is a no-op once the value is present.
//! assert!(tree.insert(4));
//! assert!(!tree.insert(4));
//!
//! // Deleting returns the removed value.
//! assert_eq!(tree.delete(&3), Some(3));
//! assert_eq!(tree.delete(&3), None);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::iter::FromIterator;
use std::mem;
use std::ptr;

/// A single node in a [`Tree`]. It owns its value and up to two children;
/// there is no parent link, so parents are re-derived by descending from
/// the root when an operation needs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// This node's left child, whose subtree holds every value less than
    /// this node's.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// This node's right child, whose subtree holds every value greater
    /// than this node's.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The height of the subtree rooted at this node: the longest
    /// downward edge-count to a leaf. A leaf has height 0; an absent
    /// subtree counts as -1.
    pub fn height(&self) -> isize {
        let left = self.left.as_deref().map_or(-1, |n| n.height());
        let right = self.right.as_deref().map_or(-1, |n| n.height());
        1 + left.max(right)
    }

    /// Whether every node in this subtree (itself included) has children
    /// whose heights differ by at most one.
    pub fn is_balanced(&self) -> bool {
        self.balanced_height().is_some()
    }

    /// The subtree height, or `None` as soon as any node violates the
    /// balance criterion. Computing both together keeps the check to a
    /// single pass.
    fn balanced_height(&self) -> Option<isize> {
        let left = match self.left.as_deref() {
            Some(n) => n.balanced_height()?,
            None => -1,
        };
        let right = match self.right.as_deref() {
            Some(n) => n.balanced_height()?,
            None => -1,
        };
        if (left - right).abs() <= 1 {
            Some(1 + left.max(right))
        } else {
            None
        }
    }
}

/// The order in which [`Tree::visit`] and [`Tree::values`] walk the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// Breadth-first: the root, then every node at depth 1, then depth 2,
    /// and so on, children enqueued left before right.
    LevelOrder,
    /// Depth-first: node, then left subtree, then right subtree.
    PreOrder,
    /// Depth-first: left subtree, then node, then right subtree. On a
    /// valid tree this yields values in ascending order.
    InOrder,
    /// Depth-first: left subtree, then right subtree, then node.
    PostOrder,
}

/// A Binary Search Tree holding a set of distinct values. Supports
/// building a balanced tree from unsorted input, point insertion and
/// deletion, four traversal orders, height/depth/balance queries, and
/// whole-tree rebalancing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // Dropping `Box`es recursively would recurse to the tree's height,
    // which after a run of unbalanced inserts can be the node count.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a height-balanced tree from arbitrary, possibly duplicated
    /// input. The input is sorted and deduplicated, then each subtree
    /// takes the middle element of its slice as the root (an even-length
    /// slice leaves the extra element in the left half).
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let tree = Tree::build(vec![3, 1, 4, 1, 5]);
    ///
    /// assert_eq!(tree.in_order(), vec![&1, &3, &4, &5]);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn build<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        Self {
            root: Self::build_balanced(values),
        }
    }

    /// Builds a subtree from already sorted, distinct values.
    fn build_balanced(mut values: Vec<T>) -> Option<Box<Node<T>>> {
        if values.is_empty() {
            return None;
        }
        let mid = values.len() / 2;
        let upper = values.split_off(mid + 1);
        let value = values.pop().expect("mid is within bounds");
        Some(Box::new(Node {
            value,
            left: Self::build_balanced(values),
            right: Self::build_balanced(upper),
        }))
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if the tree is non-empty. Together with
    /// [`Node::left`] and [`Node::right`] this lets read-only consumers
    /// walk the structure directly.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Inserts the value, attaching a new leaf at the first absent link
    /// the descent reaches. Returns `false` without changing anything if
    /// the value is already present.
    ///
    /// Inserting does *not* keep the tree balanced; see
    /// [`Tree::rebalance`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(2));
    /// assert!(!tree.insert(2));
    /// assert!(tree.contains(&2));
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        Self::insert_into(&mut self.root, value)
    }

    fn insert_into(link: &mut Option<Box<Node<T>>>, value: T) -> bool
    where
        T: Ord,
    {
        match link {
            None => {
                *link = Some(Box::new(Node::new(value)));
                true
            }
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => Self::insert_into(&mut node.left, value),
                Ordering::Greater => Self::insert_into(&mut node.right, value),
                Ordering::Equal => false,
            },
        }
    }

    /// Deletes the node holding the given value and returns the value, or
    /// `None` if it is absent. A leaf is detached, a node with one child
    /// is replaced by that child, and a node with two children takes its
    /// in-order successor's value while the successor node (which has no
    /// left child) is detached with its right child promoted into its
    /// place.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::build(vec![5, 3, 8, 1, 4]);
    ///
    /// assert_eq!(tree.delete(&3), Some(3));
    /// assert_eq!(tree.delete(&3), None);
    /// assert_eq!(tree.in_order(), vec![&1, &4, &5, &8]);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        Self::delete_from(&mut self.root, value)
    }

    fn delete_from(link: &mut Option<Box<Node<T>>>, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let node = link.as_mut()?;
        match value.cmp(&node.value) {
            Ordering::Less => Self::delete_from(&mut node.left, value),
            Ordering::Greater => Self::delete_from(&mut node.right, value),
            Ordering::Equal => Self::remove(link),
        }
    }

    /// Unlinks the node at `link`, which must be occupied, and returns its
    /// value.
    fn remove(link: &mut Option<Box<Node<T>>>) -> Option<T>
    where
        T: Ord,
    {
        let mut node = link.take()?;
        let value = match (node.left.take(), node.right.take()) {
            (None, None) => node.value,
            (Some(child), None) | (None, Some(child)) => {
                *link = Some(child);
                node.value
            }
            (left, Some(right)) => {
                let (successor, right) = Self::detach_min(right);
                node.left = left;
                node.right = right;
                let value = mem::replace(&mut node.value, successor);
                *link = Some(node);
                value
            }
        };
        Some(value)
    }

    /// Removes the left-most node of the given subtree and returns its
    /// value together with what remains of the subtree. The removed
    /// node's right child, if any, is promoted into its place.
    fn detach_min(mut node: Box<Node<T>>) -> (T, Option<Box<Node<T>>>) {
        match node.left.take() {
            None => {
                let right = node.right.take();
                (node.value, right)
            }
            Some(left) => {
                let (min, rest) = Self::detach_min(left);
                node.left = rest;
                (min, Some(node))
            }
        }
    }

    /// Potentially finds the node holding the given value, comparing and
    /// branching at each node so the search costs `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let tree = Tree::build(vec![5, 3, 8, 1]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| n.value()), Some(&3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Whether the given value is present.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Finds the parent of the node holding the given value: the last
    /// node visited before the descent arrives at the target. Returns
    /// `None` when the value sits at the root or is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let tree = Tree::build(vec![5, 3, 8, 1]);
    ///
    /// assert_eq!(tree.find_parent(&1).map(|n| n.value()), Some(&3));
    /// assert!(tree.find_parent(&5).is_none());
    /// assert!(tree.find_parent(&42).is_none());
    /// ```
    pub fn find_parent(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut parent = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match value.cmp(&node.value) {
                Ordering::Equal => return parent,
                Ordering::Less => {
                    parent = Some(node);
                    current = node.left.as_deref();
                }
                Ordering::Greater => {
                    parent = Some(node);
                    current = node.right.as_deref();
                }
            }
        }
        None
    }

    /// Calls `f` on every value in the given order without materializing
    /// a sequence. Both walks are iterative (a FIFO queue for level
    /// order, an explicit stack for the depth-first orders) so a deep,
    /// unbalanced tree cannot exhaust the call stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::{Traversal, Tree};
    ///
    /// let tree = Tree::build(vec![5, 3, 8, 1]);
    ///
    /// let mut sum = 0;
    /// tree.visit(Traversal::LevelOrder, |v| sum += v);
    /// assert_eq!(sum, 17);
    /// ```
    pub fn visit<'a, F>(&'a self, order: Traversal, mut f: F)
    where
        F: FnMut(&'a T),
    {
        match order {
            Traversal::LevelOrder => {
                let mut queue = VecDeque::new();
                queue.extend(self.root.as_deref());
                while let Some(node) = queue.pop_front() {
                    f(&node.value);
                    queue.extend(node.left.as_deref());
                    queue.extend(node.right.as_deref());
                }
            }
            order => {
                // Each node is pushed once to be expanded and once, with
                // the marker set, to be emitted. Pushes are in reverse
                // emission order since the stack is LIFO.
                let mut stack = Vec::new();
                stack.extend(self.root.as_deref().map(|root| (root, false)));
                while let Some((node, emit)) = stack.pop() {
                    if emit {
                        f(&node.value);
                        continue;
                    }
                    let left = node.left.as_deref().map(|n| (n, false));
                    let right = node.right.as_deref().map(|n| (n, false));
                    match order {
                        Traversal::PreOrder => {
                            stack.extend(right);
                            stack.extend(left);
                            stack.push((node, true));
                        }
                        Traversal::InOrder => {
                            stack.extend(right);
                            stack.push((node, true));
                            stack.extend(left);
                        }
                        Traversal::PostOrder => {
                            stack.push((node, true));
                            stack.extend(right);
                            stack.extend(left);
                        }
                        Traversal::LevelOrder => {
                            unreachable!("level order is handled above")
                        }
                    }
                }
            }
        }
    }

    /// Collects every value in the given order. The empty tree yields an
    /// empty sequence for every order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::{Traversal, Tree};
    ///
    /// let tree = Tree::build(vec![5, 3, 8, 1]);
    ///
    /// assert_eq!(tree.values(Traversal::LevelOrder), vec![&5, &3, &8, &1]);
    /// assert_eq!(tree.values(Traversal::PreOrder), vec![&5, &3, &1, &8]);
    /// ```
    pub fn values(&self, order: Traversal) -> Vec<&T> {
        let mut values = Vec::new();
        self.visit(order, |v| values.push(v));
        values
    }

    /// Every value, breadth-first.
    pub fn level_order(&self) -> Vec<&T> {
        self.values(Traversal::LevelOrder)
    }

    /// Every value, node before either subtree.
    pub fn pre_order(&self) -> Vec<&T> {
        self.values(Traversal::PreOrder)
    }

    /// Every value in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        self.values(Traversal::InOrder)
    }

    /// Every value, node after both subtrees.
    pub fn post_order(&self) -> Vec<&T> {
        self.values(Traversal::PostOrder)
    }

    /// A lazy in-order iterator over the values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let tree = Tree::build(vec![2, 1, 3]);
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: Vec::new(),
            descent: self.root.as_deref(),
        }
    }

    /// The height of the tree: the root's height, or -1 when the tree is
    /// empty (so a single-node tree has height 0).
    pub fn height(&self) -> isize {
        self.root.as_deref().map_or(-1, |n| n.height())
    }

    /// The number of edges between the root and the given node, found by
    /// descending along the node's value and confirming the arrival by
    /// reference identity. Returns `None` for a node that is not part of
    /// this tree, including a node from another tree that happens to hold
    /// an equal value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let tree = Tree::build(vec![5, 3, 8, 1]);
    /// let leaf = tree.find(&1).unwrap();
    ///
    /// assert_eq!(tree.depth(tree.root().unwrap()), Some(0));
    /// assert_eq!(tree.depth(leaf), Some(2));
    ///
    /// let other = Tree::build(vec![5, 3, 8, 1]);
    /// assert_eq!(tree.depth(other.find(&1).unwrap()), None);
    /// ```
    pub fn depth(&self, target: &Node<T>) -> Option<usize>
    where
        T: Ord,
    {
        let mut depth = 0;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if ptr::eq(node, target) {
                return Some(depth);
            }
            current = match target.value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                // Equal value on a different node means `target` belongs
                // to some other tree.
                Ordering::Equal => return None,
            };
            depth += 1;
        }
        None
    }

    /// Whether every node's children differ in height by at most one. An
    /// empty tree is balanced. This walks the whole tree; nothing
    /// maintains the property incrementally.
    pub fn is_balanced(&self) -> bool {
        self.root.as_deref().map_or(true, |n| n.is_balanced())
    }

    /// Restores height-balance by flattening the tree into its sorted
    /// value sequence and rebuilding from the midpoints, exactly as
    /// [`Tree::build`] would. The value set is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::build(vec![1, 2, 3]);
    /// for v in 4..=8 {
    ///     tree.insert(v);
    /// }
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    ///
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.in_order(), vec![&1, &2, &3, &4, &5, &6, &7, &8]);
    /// ```
    pub fn rebalance(&mut self) {
        let mut values = Vec::new();
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        let mut current = self.root.take();
        while current.is_some() || !stack.is_empty() {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }
            if let Some(mut node) = stack.pop() {
                current = node.right.take();
                values.push(node.value);
            }
        }
        self.root = Self::build_balanced(values);
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// An in-order iterator over a tree's values, created by [`Tree::iter`].
/// Keeps its own stack of unvisited ancestors instead of recursing.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    descent: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Some(node) = self.descent.take() {
            self.stack.push(node);
            self.descent = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.descent = node.right.as_deref();
        Some(&node.value)
    }
}
