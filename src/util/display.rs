use crate::rope::{Node, Rope};

/// Renders the tree shape of `rope`, one node per line, with internal weights.
///
/// ```text
/// internal weight=5
/// ├── leaf "Hello"
/// └── leaf "World"
/// ```
pub fn outline(rope: &Rope) -> String {
    let mut out = String::new();
    let Some(root) = rope.root() else {
        out.push_str("(empty)\n");
        return out;
    };

    let mut stack = vec![(root, String::new(), String::new())];
    while let Some((node, lead, indent)) = stack.pop() {
        let line = match node {
            Node::Leaf { text, .. } => format!("{lead}leaf {text:?}\n"),
            Node::Internal { weight, .. } => format!("{lead}internal weight={weight}\n"),
        };
        out.push_str(&line);

        if let Node::Internal { left, right, .. } = node {
            stack.push((right.as_ref(), format!("{indent}└── "), format!("{indent}    ")));
            stack.push((left.as_ref(), format!("{indent}├── "), format!("{indent}│   ")));
        }
    }

    out
}
