use generational_arena::Index;

use crate::tree::Tree;

impl Tree {
    /// An in-order iterator over the keys, smallest first.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter {
            tree: self,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }
}

/// In-order key iterator. Holds the left spine of the unvisited part of the
/// tree on an explicit stack, so no recursion is involved.
pub struct Iter<'a> {
    tree: &'a Tree,
    stack: Vec<Index>,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut node: Option<Index>) {
        while let Some(index) = node {
            self.stack.push(index);
            node = self.tree.get_left(index);
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let index = self.stack.pop()?;
        self.push_left_spine(self.tree.get_right(index));
        Some(self.tree.get_key(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.tree.len()))
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
