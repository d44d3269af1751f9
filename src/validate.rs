//! Integrity checks for the tree structure. These are testing oracles: each
//! panics on the first violation found and none of them runs on a mutation
//! path.

use generational_arena::Index;

use crate::tree::{Color, Tree};

impl Tree {
    /// Run every integrity check: link consistency, key ordering and the
    /// red-black color rules. Panics on the first violation.
    ///
    /// Note that removals do not rebalance, so [`Tree::validate_color`] can
    /// legitimately fail on a tree that has seen a removal since its last
    /// insertion; order and links survive any operation sequence.
    pub fn validate(&self) {
        self.validate_links();
        self.validate_order();
        self.validate_color();
    }

    /// Check that every node's key lies inside the open interval inherited
    /// from its ancestors. Panics on a violation.
    pub fn validate_order(&self) {
        let mut stack: Vec<(Index, Option<i64>, Option<i64>)> = Vec::new();
        if let Some(root) = self.root {
            stack.push((root, None, None));
        }
        while let Some((node, lower, upper)) = stack.pop() {
            let key = self.get_key(node);
            if let Some(lower) = lower {
                assert!(key > lower, "key {} at or below lower bound {}", key, lower);
            }
            if let Some(upper) = upper {
                assert!(key < upper, "key {} at or above upper bound {}", key, upper);
            }
            if let Some(left) = self.get_left(node) {
                stack.push((left, lower, Some(key)));
            }
            if let Some(right) = self.get_right(node) {
                stack.push((right, Some(key), upper));
            }
        }
    }

    /// Check that the root has no parent and that every child's parent
    /// back-reference points at the node holding it. Panics on a violation.
    pub fn validate_links(&self) {
        let mut stack: Vec<Index> = Vec::new();
        if let Some(root) = self.root {
            assert!(
                self.get_parent(root).is_none(),
                "root node {} has a parent",
                self.get_key(root)
            );
            stack.push(root);
        }
        while let Some(node) = stack.pop() {
            for child in [self.get_left(node), self.get_right(node)].iter().flatten() {
                assert_eq!(
                    self.get_parent(*child),
                    Some(node),
                    "node {} does not link back to its parent {}",
                    self.get_key(*child),
                    self.get_key(node)
                );
                stack.push(*child);
            }
        }
    }

    /// Check the red-black color rules: the root is black, no red node has
    /// a red parent, and the black-heights of every node's two subtrees are
    /// equal. Panics on a violation.
    pub fn validate_color(&self) {
        if self.get_color(self.root) == Color::Red {
            panic!("root node {} is red", self.get_key(self.root.unwrap()));
        }
        self.check_black_height(self.root);
    }

    // Returns the black-height of the subtree at `node`, counting the node
    // itself but not the absent leaf positions below it.
    fn check_black_height(&self, node: Option<Index>) -> usize {
        let index = match node {
            Some(index) => index,
            None => return 1,
        };
        if self.get_color(node) == Color::Red {
            let parent = self.get_parent(index);
            assert!(
                parent.is_some() && self.get_color(parent) == Color::Black,
                "red node {} has a red parent",
                self.get_key(index)
            );
        }
        let left_height = self.check_black_height(self.get_left(index));
        let right_height = self.check_black_height(self.get_right(index));
        assert_eq!(
            left_height,
            right_height,
            "invalid black height below key {}",
            self.get_key(index)
        );
        if self.get_color(node) == Color::Black {
            left_height + 1
        } else {
            left_height
        }
    }
}
