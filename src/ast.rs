use crate::{
    arena::Arena,
    error::arena_error::ArenaResult,
    interpreter::token::{Token, TokenKind},
};

/// Represents a binary operator.
///
/// These are the only operators of the language; there are no unary
/// operators and no parentheses.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`**`, stored internally as `$`)
    Pow,
}

impl BinaryOperator {
    /// The operator token kind this operator is classified as.
    ///
    /// # Example
    /// ```
    /// use calc::{ast::BinaryOperator, interpreter::token::TokenKind};
    ///
    /// assert_eq!(BinaryOperator::Sub.kind(), TokenKind::PlusMinus);
    /// assert_eq!(BinaryOperator::Pow.kind(), TokenKind::Exponent);
    /// ```
    #[must_use]
    pub const fn kind(self) -> TokenKind {
        match self {
            Self::Less | Self::Greater => TokenKind::Comparison,
            Self::Add | Self::Sub => TokenKind::PlusMinus,
            Self::Mul | Self::Div => TokenKind::MulDiv,
            Self::Pow => TokenKind::Exponent,
        }
    }

    /// The single glyph stored as the operator's lexeme.
    ///
    /// Exponentiation is written `**` but folded into `$`.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Less => '<',
            Self::Greater => '>',
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '$',
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Less => "<",
            Self::Greater => ">",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
        };
        write!(f, "{operator}")
    }
}

/// Index of a node inside a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in allocation order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An expression tree node.
///
/// A literal leaf has no children and a binary operation always has two;
/// the grammar never produces anything in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node {
    /// A literal operand.
    Literal(Token),
    /// A binary operation.
    Binary {
        /// The operator token.
        operator: Token,
        /// Left operand.
        left:     NodeId,
        /// Right operand.
        right:    NodeId,
    },
}

impl Node {
    /// The token carried by the node.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::Literal(token) | Self::Binary { operator: token, .. } => token,
        }
    }
}

/// The nodes of one parsed line.
///
/// The nodes themselves live in a `Vec`. The transient arena only accounts
/// for them: each push reserves `size_of::<Node>()` bytes there and discards
/// the region, so a tree can never outgrow the memory budget of a single
/// evaluation. The tree is cleared together with that arena at the start of
/// the next cycle.
#[derive(Debug, Default)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Appends `node` after deducting its size from `arena`.
    ///
    /// Nothing is written to the arena; the reservation only counts bytes.
    ///
    /// # Errors
    /// Returns the arena's error if the node does not fit; the tree is left
    /// unchanged.
    pub fn push(&mut self, arena: &mut Arena, node: Node) -> ArenaResult<NodeId> {
        arena.allocate(size_of::<Node>())?;

        let id = NodeId(self.nodes.len());
        self.nodes.push(node);

        Ok(id)
    }

    /// Looks up a node.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// The root of the tree.
    ///
    /// Children are always pushed before their parent, so the root is the
    /// most recently pushed node.
    #[must_use]
    pub const fn root(&self) -> Option<NodeId> {
        match self.nodes.len() {
            0 => None,
            len => Some(NodeId(len - 1)),
        }
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no node has been pushed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}
