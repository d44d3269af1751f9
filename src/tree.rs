use std::cmp::Ordering;
use std::fmt;

use generational_arena::{Arena, Index};

#[derive(PartialEq, Copy, Clone, Debug)]
pub(crate) enum Color {
    Red,
    Black,
}

#[derive(PartialEq, Copy, Clone, Debug)]
pub(crate) enum NodeType {
    LeftChild,
    RightChild,
    Orphan,
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) parent: Option<Index>,
    pub(crate) left: Option<Index>,
    pub(crate) right: Option<Index>,

    pub(crate) key: i64,

    pub(crate) color: Color,
}

impl Node {
    pub(crate) fn new(key: i64) -> Self {
        Node {
            parent: None,
            left: None,
            right: None,
            key,
            color: Color::Red,
        }
    }
}

/// An ordered set of `i64` keys kept balanced with red-black coloring.
///
/// Nodes live in a generational arena and refer to each other by index, so
/// rotations and splices are plain index reassignments and a stale index
/// panics instead of dangling.
#[derive(Clone)]
pub struct Tree {
    pub(crate) nodes: Arena<Node>,
    pub(crate) root: Option<Index>,
}

impl Tree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Tree {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Create an empty tree whose arena can hold `capacity` nodes before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Tree {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node, keeping the arena allocation for reuse.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Returns true iff `key` is present.
    pub fn contains(&self, key: i64) -> bool {
        self.find(key).is_some()
    }

    /// The smallest key in the tree, if any.
    pub fn first(&self) -> Option<i64> {
        self.root.map(|root| self.get_key(self.minimum(root)))
    }

    /// The largest key in the tree, if any.
    pub fn last(&self) -> Option<i64> {
        self.root.map(|root| self.get_key(self.maximum(root)))
    }

    /// Remove `key` from the tree. Returns whether the key was present.
    ///
    /// Removal is plain search-tree removal: a node with at most one child
    /// is spliced out, a node with two children is replaced by its in-order
    /// successor. No rebalancing happens here beyond keeping the root
    /// black, so a removal can leave the black-height invariant broken
    /// while the order and link invariants always hold.
    pub fn remove(&mut self, key: i64) -> bool {
        let node = match self.find(key) {
            Some(node) => node,
            None => return false,
        };
        if self.get_left(node).is_some() && self.get_right(node).is_some() {
            // Two children: the minimum of the right subtree has no left
            // child, so it can be spliced out and promoted into the
            // removed node's position.
            let successor = self.minimum(self.get_right(node).unwrap());
            self.splice(successor);

            // Read the node's links only after the splice; the successor
            // may have been its direct right child.
            let parent = self.get_parent(node);
            let left = self.get_left(node);
            let right = self.get_right(node);

            match self.get_node_type(node) {
                NodeType::LeftChild => self.set_left(parent.unwrap(), Some(successor)),
                NodeType::RightChild => self.set_right(parent.unwrap(), Some(successor)),
                NodeType::Orphan => self.root = Some(successor),
            }
            self.set_parent(successor, parent);

            self.set_left(successor, left);
            if let Some(left) = left {
                self.set_parent(left, Some(successor));
            }
            self.set_right(successor, right);
            if let Some(right) = right {
                self.set_parent(right, Some(successor));
            }
        } else {
            self.splice(node);
        }
        self.nodes.remove(node);
        // A splice or transplant can promote a red node to the root; the
        // root must stay black or the next insertion's fixup would walk
        // past it looking for a grandparent.
        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
        true
    }

    // Descends from the root comparing keys, left when smaller, right when
    // larger. Returns the index of the matching node.
    pub(crate) fn find(&self, key: i64) -> Option<Index> {
        let mut node = self.root;
        while let Some(index) = node {
            node = match key.cmp(&self.get_key(index)) {
                Ordering::Less => self.get_left(index),
                Ordering::Greater => self.get_right(index),
                Ordering::Equal => return Some(index),
            };
        }
        None
    }

    // Leftmost node of the subtree rooted at `from`.
    pub(crate) fn minimum(&self, from: Index) -> Index {
        let mut node = from;
        while let Some(left) = self.get_left(node) {
            node = left;
        }
        node
    }

    // Rightmost node of the subtree rooted at `from`.
    pub(crate) fn maximum(&self, from: Index) -> Index {
        let mut node = from;
        while let Some(right) = self.get_right(node) {
            node = right;
        }
        node
    }

    // Unlinks a node with at most one child by re-linking that child (or
    // its absence) into the parent slot that pointed at the node. Returns
    // the replacement child; removing the node from the arena is the
    // caller's job.
    pub(crate) fn splice(&mut self, node: Index) -> Option<Index> {
        let left = self.get_left(node);
        let right = self.get_right(node);
        if left.is_some() && right.is_some() {
            panic!("cannot splice a node with two children");
        }
        let offspring = left.or(right);

        match self.get_node_type(node) {
            NodeType::LeftChild => self.set_left(self.get_parent(node).unwrap(), offspring),
            NodeType::RightChild => self.set_right(self.get_parent(node).unwrap(), offspring),
            NodeType::Orphan => self.root = offspring,
        }
        if let Some(offspring) = offspring {
            self.set_parent(offspring, self.get_parent(node));
        }
        offspring
    }

    // Returns a NodeType enum indicating if the given node is a left child,
    // right child in relation to its parent or an orphan (the root is an
    // orphan, neither left nor right).
    pub(crate) fn get_node_type(&self, node: Index) -> NodeType {
        match self.get_parent(node) {
            Some(parent) => {
                if self.get_left(parent) == Some(node) {
                    NodeType::LeftChild
                } else {
                    NodeType::RightChild
                }
            }
            None => NodeType::Orphan,
        }
    }

    // Getters and setters
    pub(crate) fn set_right(&mut self, node: Index, right: Option<Index>) {
        let node = self.nodes.get_mut(node).unwrap();
        node.right = right;
    }

    pub(crate) fn get_right(&self, node: Index) -> Option<Index> {
        let node = self.nodes.get(node).unwrap();
        node.right
    }

    pub(crate) fn set_left(&mut self, node: Index, left: Option<Index>) {
        let node = self.nodes.get_mut(node).unwrap();
        node.left = left;
    }

    pub(crate) fn get_left(&self, node: Index) -> Option<Index> {
        let node = self.nodes.get(node).unwrap();
        node.left
    }

    pub(crate) fn set_parent(&mut self, node: Index, parent: Option<Index>) {
        let node = self.nodes.get_mut(node).unwrap();
        node.parent = parent;
    }

    pub(crate) fn get_parent(&self, node: Index) -> Option<Index> {
        let node = self.nodes.get(node).unwrap();
        node.parent
    }

    pub(crate) fn set_color(&mut self, node: Index, color: Color) {
        let node = self.nodes.get_mut(node).unwrap();
        node.color = color;
    }

    // Absent children count as black leaves.
    pub(crate) fn get_color(&self, node: Option<Index>) -> Color {
        match node {
            Some(index) => self.nodes.get(index).unwrap().color,
            None => Color::Black,
        }
    }

    pub(crate) fn get_key(&self, node: Index) -> i64 {
        let node = self.nodes.get(node).unwrap();
        node.key
    }
}

impl Default for Tree {
    fn default() -> Self {
        Tree::new()
    }
}

/// Indented pre-order dump, one `key color` per line, children indented one
/// column below their parent.
impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = match self.root {
            Some(root) => root,
            None => return writeln!(f, "empty tree"),
        };
        let mut stack = vec![(root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            writeln!(
                f,
                "{:indent$}{} {:?}",
                "",
                self.get_key(node),
                self.get_color(Some(node)),
                indent = depth
            )?;
            // Right pushed first so the left subtree prints first.
            if let Some(right) = self.get_right(node) {
                stack.push((right, depth + 1));
            }
            if let Some(left) = self.get_left(node) {
                stack.push((left, depth + 1));
            }
        }
        Ok(())
    }
}
