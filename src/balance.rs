use std::cmp::Ordering;

use generational_arena::Index;

use crate::tree::{Color, Node, NodeType, Tree};

impl Tree {
    /// Insert `key` into the tree, rebalancing as needed.
    ///
    /// Inserting a key that is already present is a no-op. The first node of
    /// an empty tree is created black; any other new node is created red and
    /// repaired by the insertion fixup.
    pub fn insert(&mut self, key: i64) {
        let mut current = match self.root {
            Some(root) => root,
            None => {
                let root = self.nodes.insert(Node::new(key));
                self.set_color(root, Color::Black);
                self.root = Some(root);
                return;
            }
        };
        loop {
            current = match key.cmp(&self.get_key(current)) {
                Ordering::Equal => return,
                Ordering::Less => match self.get_left(current) {
                    Some(left) => left,
                    None => {
                        let node = self.nodes.insert(Node::new(key));
                        self.set_left(current, Some(node));
                        self.set_parent(node, Some(current));
                        self.insert_rebalance(node);
                        return;
                    }
                },
                Ordering::Greater => match self.get_right(current) {
                    Some(right) => right,
                    None => {
                        let node = self.nodes.insert(Node::new(key));
                        self.set_right(current, Some(node));
                        self.set_parent(node, Some(current));
                        self.insert_rebalance(node);
                        return;
                    }
                },
            };
        }
    }

    // Restores the red-black invariants after inserting a red node. Walks
    // parent links upward until no red-red conflict remains, then forces
    // the root black.
    fn insert_rebalance(&mut self, mut node: Index) {
        while self.get_color(self.get_parent(node)) == Color::Red {
            // The parent is red, so it exists and is not the root; a
            // grandparent must exist too.
            let mut parent = self.get_parent(node).unwrap();
            let grandparent = self.get_parent(parent).unwrap();
            let uncle = self.get_uncle(node);
            if self.get_color(uncle) == Color::Red {
                // Red uncle: recolor parent and uncle black, grandparent
                // red, and continue from the grandparent since the
                // conflict may have moved up.
                self.set_color(uncle.unwrap(), Color::Black);
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
            } else {
                // Black uncle: rotations are needed.
                let parent_node_type = self.get_node_type(parent);
                if self.get_node_type(node) != parent_node_type {
                    // Zig-zag: node and parent are opposite-handed
                    // children. Rotate the parent to straighten the path,
                    // which demotes it below the node.
                    if parent_node_type == NodeType::LeftChild {
                        self.left_rotate(parent);
                    } else {
                        self.right_rotate(parent);
                    }
                    node = parent;
                    parent = self.get_parent(node).unwrap();
                }
                // Zig-zig: rotate the grandparent away from the conflict
                // and swap the parent's and grandparent's colors. This
                // restores the invariant locally.
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                if self.get_node_type(parent) == NodeType::LeftChild {
                    self.right_rotate(grandparent);
                } else {
                    self.left_rotate(grandparent);
                }
            }
        }
        self.set_color(self.root.unwrap(), Color::Black);
    }

    // Rotates the nodes to the left
    //    p              q
    //   / \            / \
    //  a   q   -->    p   c
    //     / \        / \
    //    b   c      a   b
    pub(crate) fn left_rotate(&mut self, rotation_root: Index) {
        // Left rotation so the pivot is to the right
        let pivot = self
            .get_right(rotation_root)
            .expect("left rotation requires a right child");
        let pivot_left = self.get_left(pivot);
        let parent = self.get_parent(rotation_root);
        // The left child of the pivot becomes the right child of the rotation root
        self.set_right(rotation_root, pivot_left);
        if let Some(pivot_left) = pivot_left {
            self.set_parent(pivot_left, Some(rotation_root));
        }

        // The pivot replaces the rotation root in the tree
        self.set_parent(pivot, parent);
        match self.get_node_type(rotation_root) {
            NodeType::LeftChild => self.set_left(parent.unwrap(), Some(pivot)),
            NodeType::RightChild => self.set_right(parent.unwrap(), Some(pivot)),
            NodeType::Orphan => self.root = Some(pivot),
        }

        // Set the left child of the pivot to be the rotation root
        self.set_left(pivot, Some(rotation_root));
        self.set_parent(rotation_root, Some(pivot));
    }

    // Rotates the nodes to the right
    //     q             p
    //    / \           / \
    //   p   c  -->    a   q
    //  / \               / \
    // a   b             b   c
    pub(crate) fn right_rotate(&mut self, rotation_root: Index) {
        // Right rotation so the pivot is to the left
        let pivot = self
            .get_left(rotation_root)
            .expect("right rotation requires a left child");
        let pivot_right = self.get_right(pivot);
        let parent = self.get_parent(rotation_root);
        // The right child of the pivot becomes the left child of the rotation root
        self.set_left(rotation_root, pivot_right);
        if let Some(pivot_right) = pivot_right {
            self.set_parent(pivot_right, Some(rotation_root));
        }

        // The pivot replaces the rotation root in the tree
        self.set_parent(pivot, parent);
        match self.get_node_type(rotation_root) {
            NodeType::LeftChild => self.set_left(parent.unwrap(), Some(pivot)),
            NodeType::RightChild => self.set_right(parent.unwrap(), Some(pivot)),
            NodeType::Orphan => self.root = Some(pivot),
        }

        // Set the right child of the pivot to be the rotation root
        self.set_right(pivot, Some(rotation_root));
        self.set_parent(rotation_root, Some(pivot));
    }

    // The other node sharing the parent, if any.
    fn get_sibling(&self, node: Index) -> Option<Index> {
        let parent = self.get_parent(node);
        match self.get_node_type(node) {
            NodeType::LeftChild => self.get_right(parent.unwrap()),
            NodeType::RightChild => self.get_left(parent.unwrap()),
            NodeType::Orphan => None,
        }
    }

    // The parent's sibling, if any.
    fn get_uncle(&self, node: Index) -> Option<Index> {
        match self.get_parent(node) {
            Some(parent) => self.get_sibling(parent),
            None => None,
        }
    }
}
