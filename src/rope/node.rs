/// A rope tree node. Children are exclusively owned, so a tree never shares
/// structure with another rope.
pub(crate) enum Node {
    Leaf {
        text: String,
        len: usize,
    },
    Internal {
        left: Box<Node>,
        right: Box<Node>,
        weight: usize,
    },
}

/// Half of a split. `None` stands for an empty piece; the tree never holds empty leaves.
pub(crate) type Part = Option<Box<Node>>;

impl Node {
    pub(crate) fn new_leaf(text: String) -> Box<Self> {
        debug_assert!(!text.is_empty(), "leaves are never empty");
        let len = text.chars().count();
        Box::new(Node::Leaf { text, len })
    }

    pub(crate) fn new_internal(left: Box<Self>, right: Box<Self>) -> Box<Self> {
        Box::new(Node::Internal {
            weight: left.len(),
            left,
            right,
        })
    }

    /// Builds a balanced tree over a non-empty slice, halving it until the
    /// pieces fit in a leaf of `leaf_len` chars.
    pub(crate) fn build(text: &[char], leaf_len: usize) -> Box<Self> {
        if text.len() <= leaf_len {
            return Node::new_leaf(text.iter().collect());
        }

        let mid = text.len() / 2;
        let left = Node::build(&text[..mid], leaf_len);
        let right = Node::build(&text[mid..], leaf_len);
        Node::new_internal(left, right)
    }

    /// Walks the right spine, summing weights. That spine can grow to O(n) after
    /// many prepends; [`Rope`](super::Rope) caches its total length instead.
    pub(crate) fn len(&self) -> usize {
        let mut node = self;
        let mut total = 0;
        loop {
            match node {
                Node::Leaf { len, .. } => return total + len,
                Node::Internal { weight, right, .. } => {
                    total += weight;
                    node = right;
                }
            }
        }
    }

    pub(crate) fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            if let Node::Internal { left, right, .. } = node {
                stack.push((left.as_ref(), depth + 1));
                stack.push((right.as_ref(), depth + 1));
            }
        }
        deepest
    }

    /// Returns the char at `index`, or `None` past the end.
    pub(crate) fn char_at(&self, mut index: usize) -> Option<char> {
        let mut node = self;
        loop {
            match node {
                Node::Leaf { text, .. } => return text.chars().nth(index),
                Node::Internal { left, right, weight } => {
                    if index < *weight {
                        node = left;
                    } else {
                        index -= weight;
                        node = right;
                    }
                }
            }
        }
    }

    /// Appends the chars in `[start, end)` to `out`, skipping subtrees that lie
    /// entirely outside the range. Callers guarantee `start < end <= self.len()`.
    pub(crate) fn write_range(&self, start: usize, end: usize, out: &mut String) {
        let mut stack = vec![(self, 0)];
        while let Some((node, offset)) = stack.pop() {
            match node {
                Node::Leaf { text, len } => {
                    let from = start.saturating_sub(offset);
                    let to = (end - offset).min(*len);
                    out.extend(text.chars().skip(from).take(to.saturating_sub(from)));
                }
                Node::Internal { left, right, weight } => {
                    let mid = offset + weight;
                    if mid < end {
                        stack.push((right.as_ref(), mid));
                    }
                    if start < mid {
                        stack.push((left.as_ref(), offset));
                    }
                }
            }
        }
    }

    /// Joins two parts under a new internal node. `left_len` must be the
    /// length of `left`; it becomes the weight without walking the subtree.
    pub(crate) fn join(left: Part, left_len: usize, right: Part) -> Part {
        match (left, right) {
            (Some(left), Some(right)) => Some(Box::new(Node::Internal { left, right, weight: left_len })),
            (left, None) => left,
            (None, right) => right,
        }
    }

    /// Splits a node of length `len` into `[0, at)` and `[at, len)`.
    ///
    /// The descent is a loop, so lopsided trees built by long runs of appends
    /// cannot exhaust the stack. Subtrees left behind on either side are
    /// collected with their lengths and joined back up innermost first.
    pub(crate) fn split(node: Box<Self>, len: usize, at: usize) -> (Part, Part) {
        let mut prefix: Vec<(Box<Node>, usize)> = Vec::new();
        let mut suffix: Vec<(Box<Node>, usize)> = Vec::new();
        let (mut node, mut len, mut at) = (node, len, at);

        loop {
            match *node {
                Node::Leaf { mut text, len: leaf_len } => {
                    if at == 0 {
                        suffix.push((Box::new(Node::Leaf { text, len: leaf_len }), leaf_len));
                    } else if at >= leaf_len {
                        prefix.push((Box::new(Node::Leaf { text, len: leaf_len }), leaf_len));
                    } else {
                        let tail = text.split_off(byte_offset(&text, at));
                        prefix.push((Box::new(Node::Leaf { text, len: at }), at));
                        suffix.push((Box::new(Node::Leaf { text: tail, len: leaf_len - at }), leaf_len - at));
                    }
                    break;
                }
                Node::Internal { left, right, weight } => {
                    if at == weight {
                        prefix.push((left, weight));
                        suffix.push((right, len - weight));
                        break;
                    } else if at < weight {
                        suffix.push((right, len - weight));
                        (node, len) = (left, weight);
                    } else {
                        prefix.push((left, weight));
                        (node, len, at) = (right, len - weight, at - weight);
                    }
                }
            }
        }

        let mut left: Part = None;
        for (piece, piece_len) in prefix.into_iter().rev() {
            left = Node::join(Some(piece), piece_len, left);
        }

        let (mut right, mut right_len): (Part, usize) = (None, 0);
        for (piece, piece_len) in suffix.into_iter().rev() {
            right = Node::join(right, right_len, Some(piece));
            right_len += piece_len;
        }

        (left, right)
    }

    /// Deep copy, built bottom-up from an explicit stack.
    pub(crate) fn clone_tree(&self) -> Part {
        enum Step<'a> {
            Visit(&'a Node),
            Join(usize),
        }

        let mut built: Vec<Box<Node>> = Vec::new();
        let mut steps = vec![Step::Visit(self)];
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Node::Leaf { text, len }) => {
                    built.push(Box::new(Node::Leaf { text: text.clone(), len: *len }));
                }
                Step::Visit(Node::Internal { left, right, weight }) => {
                    steps.push(Step::Join(*weight));
                    steps.push(Step::Visit(right));
                    steps.push(Step::Visit(left));
                }
                Step::Join(weight) => {
                    if let (Some(right), Some(left)) = (built.pop(), built.pop()) {
                        built.push(Box::new(Node::Internal { left, right, weight }));
                    }
                }
            }
        }
        built.pop()
    }

    /// Detaches every leaf, in order. Internal nodes are freed one at a time, so
    /// this also serves as a stack-safe way to drop a tree.
    pub(crate) fn into_leaves(node: Box<Self>) -> Vec<Box<Self>> {
        let mut leaves = Vec::new();
        let mut stack = vec![node];
        while let Some(node) = stack.pop() {
            match *node {
                Node::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
                leaf => leaves.push(Box::new(leaf)),
            }
        }
        leaves
    }

    /// Pairs adjacent nodes level by level until one root remains.
    pub(crate) fn from_leaves(mut level: Vec<Box<Self>>) -> Part {
        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len().div_ceil(2));
            let mut nodes = level.into_iter();
            while let Some(left) = nodes.next() {
                match nodes.next() {
                    Some(right) => next.push(Node::new_internal(left, right)),
                    None => next.push(left),
                }
            }
            level = next;
        }
        level.pop()
    }
}

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map_or(text.len(), |(offset, _)| offset)
}
