use std::{convert::Infallible, fmt, ops::Range, str::FromStr};

use tracing::{debug, trace};

use super::{
    chunks::Chunks,
    node::{Node, Part},
};
use crate::error::{Result, RopeError};

/// Leaf threshold used when none is given: ranges of at most this many chars
/// become a single leaf.
pub const DEFAULT_LEAF_LEN: usize = 5;

/// A string held as a weight-balanced binary tree of text fragments.
///
/// Positions and lengths count `char`s. Ranges are half-open (`start..end`)
/// everywhere, the same as [`Rope::split`].
pub struct Rope {
    root: Part,
    len: usize,
    leaf_len: usize,
}

impl Rope {
    pub fn new(text: &str) -> Self {
        Self::with_leaf_len(text, DEFAULT_LEAF_LEN)
    }

    /// Builds a balanced tree over `text`. A `leaf_len` of 0 is treated as 1.
    pub fn with_leaf_len(text: &str, leaf_len: usize) -> Self {
        let leaf_len = leaf_len.max(1);
        let chars = text.chars().collect::<Vec<_>>();
        let root = (!chars.is_empty()).then(|| Node::build(&chars, leaf_len));

        Self { root, len: chars.len(), leaf_len }
    }

    pub fn leaf_len(&self) -> usize {
        self.leaf_len
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree: 0 for the empty rope, 1 for a single leaf.
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.depth())
    }

    pub fn char_at(&self, index: usize) -> Result<char> {
        let len = self.len();
        if index >= len {
            return Err(RopeError::at(index, len));
        }

        self.root.as_deref().and_then(|root| root.char_at(index)).ok_or(RopeError::at(index, len))
    }

    /// Returns the text in `range` without flattening the rest of the rope.
    pub fn report(&self, range: Range<usize>) -> Result<String> {
        let Range { start, end } = range;
        let len = self.len();
        if start > end || end > len {
            return Err(RopeError::range(start, end, len));
        }

        // One byte per char; multi-byte text grows past this estimate.
        let mut out = String::with_capacity(end - start);
        if let Some(root) = self.root.as_deref().filter(|_| start < end) {
            root.write_range(start, end, &mut out);
        }
        Ok(out)
    }

    /// Flattens the rope into a single string.
    pub fn collect(&self) -> String {
        self.chunks().collect()
    }

    pub fn chunks(&self) -> Chunks<'_> {
        Chunks::new(self.root.as_deref())
    }

    /// Joins `other` after `self`. Neither operand's text is copied.
    pub fn concat(mut self, other: Rope) -> Rope {
        self.append(other);
        self
    }

    pub fn append(&mut self, mut other: Rope) {
        trace!(left = self.len, right = other.len, "concat");
        self.root = Node::join(self.root.take(), self.len, other.root.take());
        self.len += other.len;
    }

    /// Consumes the rope and returns `[0, at)` and `[at, len)`.
    ///
    /// Use [`Rope::split_off`] to keep the rope on failure.
    pub fn split(mut self, at: usize) -> Result<(Rope, Rope)> {
        let suffix = self.split_off(at)?;
        Ok((self, suffix))
    }

    /// Keeps `[0, at)` in place and returns `[at, len)`. On error the rope is
    /// left untouched.
    pub fn split_off(&mut self, at: usize) -> Result<Rope> {
        let len = self.len;
        if at > len {
            return Err(RopeError::at(at, len));
        }

        trace!(at, len, "split");
        let (prefix, suffix) = match self.root.take() {
            Some(root) => Node::split(root, len, at),
            None => (None, None),
        };
        self.root = prefix;
        self.len = at;

        Ok(Rope { root: suffix, len: len - at, leaf_len: self.leaf_len })
    }

    /// Places `source` at `at`, as `prefix + source + suffix`.
    pub fn insert(&mut self, at: usize, source: Rope) -> Result<()> {
        let suffix = self.split_off(at)?;
        self.append(source);
        self.append(suffix);
        Ok(())
    }

    pub fn insert_str(&mut self, at: usize, text: &str) -> Result<()> {
        let len = self.len();
        if at > len {
            return Err(RopeError::at(at, len));
        }

        self.insert(at, Rope::with_leaf_len(text, self.leaf_len))
    }

    /// Removes the non-empty `range`.
    pub fn delete(&mut self, range: Range<usize>) -> Result<()> {
        let Range { start, end } = range;
        let len = self.len();
        if start >= end || end > len {
            return Err(RopeError::range(start, end, len));
        }

        let suffix = self.split_off(end)?;
        self.split_off(start)?;
        self.append(suffix);
        Ok(())
    }

    /// Whether the tree is at most as deep as a Fibonacci tree of the same length.
    pub fn is_balanced(&self) -> bool {
        let depth = self.depth();
        depth == 0 || self.len() >= fib(depth + 1)
    }

    /// Rebuilds the tree from its existing leaves. Leaf text is moved, not copied.
    pub fn rebalance(&mut self) {
        if let Some(root) = self.root.take() {
            let before = root.depth();
            let leaves = Node::into_leaves(root);
            let count = leaves.len();
            self.root = Node::from_leaves(leaves);
            debug!(leaves = count, before, after = self.depth(), "rebalanced rope");
        }
    }

    pub(crate) fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }
}

fn fib(n: usize) -> usize {
    let (mut a, mut b) = (0usize, 1usize);
    for _ in 0..n {
        (a, b) = (b, a.saturating_add(b));
    }
    a
}

impl Default for Rope {
    fn default() -> Self {
        Self { root: None, len: 0, leaf_len: DEFAULT_LEAF_LEN }
    }
}

impl Clone for Rope {
    fn clone(&self) -> Self {
        Self { root: self.root.as_deref().and_then(Node::clone_tree), len: self.len, leaf_len: self.leaf_len }
    }
}

impl Drop for Rope {
    fn drop(&mut self) {
        if let Some(root) = self.root.take() {
            drop(Node::into_leaves(root));
        }
    }
}

impl From<&str> for Rope {
    fn from(text: &str) -> Self {
        Rope::new(text)
    }
}

impl From<String> for Rope {
    fn from(text: String) -> Self {
        Rope::new(&text)
    }
}

impl FromStr for Rope {
    type Err = Infallible;

    fn from_str(text: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Rope::new(text))
    }
}

impl PartialEq for Rope {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.chunks().flat_map(str::chars).eq(other.chunks().flat_map(str::chars))
    }
}

impl Eq for Rope {}

impl fmt::Display for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chunks().try_for_each(|chunk| f.write_str(chunk))
    }
}

impl fmt::Debug for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rope")
            .field("text", &self.collect())
            .field("len", &self.len())
            .field("depth", &self.depth())
            .field("leaf_len", &self.leaf_len)
            .finish()
    }
}
