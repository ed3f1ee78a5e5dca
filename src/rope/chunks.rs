use super::node::Node;

/// Iterator over the leaf fragments of a rope, left to right.
pub struct Chunks<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Chunks<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self { stack: root.into_iter().collect() }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Node::Leaf { text, .. } => return Some(text),
                Node::Internal { left, right, .. } => {
                    self.stack.push(right);
                    self.stack.push(left);
                }
            }
        }
        None
    }
}
