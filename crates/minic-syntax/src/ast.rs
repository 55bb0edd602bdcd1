/// Kinds a tree node can carry. Token-only kinds such as end of input have no
/// node counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Number,
    Identifier,
    Assign,
    Plus,
}

/// A node of the syntax tree. Children are owned exclusively by their parent.
#[derive(Debug, PartialEq, Eq)]
pub struct AstNode {
    kind: NodeKind,
    value: String,
    left: Option<Box<AstNode>>,
    right: Option<Box<AstNode>>,
}

impl AstNode {
    pub fn new(
        kind: NodeKind,
        value: impl Into<String>,
        left: Option<AstNode>,
        right: Option<AstNode>,
    ) -> Self {
        AstNode {
            kind,
            value: value.into(),
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn leaf(kind: NodeKind, value: impl Into<String>) -> Self {
        AstNode::new(kind, value, None, None)
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn left(&self) -> Option<&AstNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&AstNode> {
        self.right.as_deref()
    }
}
