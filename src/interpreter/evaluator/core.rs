use crate::{
    ast::{Node, NodeId, Tree},
    error::RuntimeError,
    interpreter::{config::ExponentMode, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the evaluation settings.
///
/// The context holds no per-line state: the tree is only read, never
/// rewritten, and it is discarded with the transient arena afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context {
    /// How `**` is computed.
    pub exponent: ExponentMode,
}

impl Context {
    /// Creates a context using the given exponentiation semantics.
    #[must_use]
    pub const fn new(exponent: ExponentMode) -> Self {
        Self { exponent }
    }

    /// Reduces the subtree rooted at `node` to a single value.
    ///
    /// Both children of a binary node are evaluated first, left then right,
    /// and the operator is applied to their values. Promotion to float is
    /// decided separately at every node, so a float only affects the
    /// operations that consume it on its way up to the root.
    ///
    /// # Errors
    /// - `MalformedTree` if a node is missing or a leaf holds an operator.
    /// - `Overflow` if integer arithmetic overflows.
    ///
    /// # Example
    /// ```
    /// use calc::{
    ///     arena::Arena,
    ///     ast::Tree,
    ///     interpreter::{
    ///         evaluator::core::Context, lexer::Lexer, parser::core::parse_line, value::Value,
    ///     },
    /// };
    ///
    /// let mut arena = Arena::new("transient", 1024);
    /// let mut tree = Tree::new();
    /// let root = parse_line(&mut Lexer::new("7 / 2 + 1", 32), &mut arena, &mut tree).unwrap()
    ///                                                                             .unwrap();
    ///
    /// assert_eq!(Context::default().eval(&tree, root).unwrap(), Value::Float(4.5));
    /// ```
    pub fn eval(&self, tree: &Tree, node: NodeId) -> EvalResult<Value> {
        match tree.get(node).ok_or(RuntimeError::MalformedTree { node })? {
            Node::Literal(token) => Value::from_literal(token, node),
            Node::Binary { operator, left, right } => {
                let op = operator.as_operator()
                                 .ok_or(RuntimeError::MalformedTree { node })?;
                let left = self.eval(tree, *left)?;
                let right = self.eval(tree, *right)?;

                let value = self.eval_binary(op, left, right)?;
                tracing::trace!(%node, %op, %value, "reduced");

                Ok(value)
            },
        }
    }
}
