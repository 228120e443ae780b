use crate::{
    ast::NodeId,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        token::{Payload, Token, TokenKind},
    },
    util::num::i64_to_f32,
};

/// The result of evaluating an expression or sub-expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64-bit integer.
    Integer(i64),
    /// A 32-bit float.
    Float(f32),
}

impl Value {
    /// Reads the value of a literal token.
    ///
    /// # Errors
    /// Returns `MalformedTree` for an operator token.
    pub const fn from_literal(token: &Token, node: NodeId) -> EvalResult<Self> {
        match token.payload {
            Payload::Integer(v) => Ok(Self::Integer(v)),
            Payload::Float(v) => Ok(Self::Float(v)),
            Payload::Operator { .. } => Err(RuntimeError::MalformedTree { node }),
        }
    }

    /// The literal token kind matching this value.
    #[must_use]
    pub const fn kind(self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Float(_) => TokenKind::Float,
        }
    }

    /// Returns `true` for a float.
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Converts the value to a float, widening integers.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(3).as_float(), 3.0);
    /// ```
    #[must_use]
    pub fn as_float(self) -> f32 {
        match self {
            Self::Integer(n) => i64_to_f32(n),
            Self::Float(f) => f,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:.2}"),
        }
    }
}
