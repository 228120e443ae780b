use crate::ast::{BinaryOperator, NodeId};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Integer arithmetic overflowed.
    Overflow {
        /// The operator that overflowed.
        operator: BinaryOperator,
    },
    /// A node is missing, or an operator sits where a literal belongs.
    MalformedTree {
        /// The offending node.
        node: NodeId,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow { operator } => write!(f,
                                                  "Error: Integer overflow while trying to compute '{operator}'."),
            Self::MalformedTree { node } => {
                write!(f, "Error: Expression tree is malformed at node {node}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
