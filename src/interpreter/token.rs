use crate::{arena::Region, ast::BinaryOperator};

/// The kind of a token.
///
/// Operator kinds are declared before literal kinds, so checking whether a
/// token is an operator is a single ordinal comparison.
///
/// There is no kind for unrecognized input. A character the lexer does not
/// know ends the token stream instead, so no token ever carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// `<` and `>`
    Comparison,
    /// `+` and `-`
    PlusMinus,
    /// `*` and `/`
    MulDiv,
    /// `**`
    Exponent,
    /// Decimal integer literal, such as `42`.
    Integer,
    /// Integer literal with an `h` suffix, such as `42h`.
    HexInteger,
    /// Integer literal with a `b` suffix, such as `101b`.
    BinaryInteger,
    /// Floating-point value.
    Float,
}

impl TokenKind {
    /// Returns `true` for the four operator kinds.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::token::TokenKind;
    ///
    /// assert!(TokenKind::Exponent.is_operator());
    /// assert!(!TokenKind::Integer.is_operator());
    /// ```
    #[must_use]
    pub const fn is_operator(self) -> bool {
        (self as u8) < (Self::Integer as u8)
    }

    /// Binding strength of an operator kind.
    ///
    /// Comparison binds loosest and exponentiation tightest. Literal kinds
    /// have precedence `0`, below every operator.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Comparison => 1,
            Self::PlusMinus => 2,
            Self::MulDiv => 3,
            Self::Exponent => 4,
            Self::Integer | Self::HexInteger | Self::BinaryInteger | Self::Float => 0,
        }
    }
}

/// The value carried by a token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A 32-bit float.
    Float(f32),
    /// An operator, together with its one-glyph lexeme in the transient
    /// arena.
    Operator {
        /// The operator.
        operator: BinaryOperator,
        /// The NUL-terminated glyph.
        lexeme:   Region,
    },
}

/// A lexical token.
///
/// `end` is the input offset just past the token, which lets the lexer
/// compute how many bytes the token consumed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// The kind of the token.
    pub kind:    TokenKind,
    /// The value of the token.
    pub payload: Payload,
    /// Input offset just past the token.
    pub end:     usize,
}

impl Token {
    /// Creates an integer literal token. `kind` records the literal's suffix.
    #[must_use]
    pub const fn integer(kind: TokenKind, value: i64, end: usize) -> Self {
        Self { kind,
               payload: Payload::Integer(value),
               end }
    }

    /// Creates a float token.
    #[must_use]
    pub const fn float(value: f32, end: usize) -> Self {
        Self { kind:    TokenKind::Float,
               payload: Payload::Float(value),
               end, }
    }

    /// Creates an operator token whose glyph is stored at `lexeme`.
    #[must_use]
    pub const fn operator(operator: BinaryOperator, lexeme: Region, end: usize) -> Self {
        Self { kind: operator.kind(),
               payload: Payload::Operator { operator, lexeme },
               end }
    }

    /// Returns the operator, if this is an operator token.
    #[must_use]
    pub const fn as_operator(&self) -> Option<BinaryOperator> {
        match self.payload {
            Payload::Operator { operator, .. } => Some(operator),
            Payload::Integer(_) | Payload::Float(_) => None,
        }
    }

    /// Returns the arena region holding the operator glyph.
    #[must_use]
    pub const fn lexeme(&self) -> Option<Region> {
        match self.payload {
            Payload::Operator { lexeme, .. } => Some(lexeme),
            Payload::Integer(_) | Payload::Float(_) => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.payload {
            Payload::Integer(value) => write!(f, "{value}"),
            Payload::Float(value) => write!(f, "{value:.2}"),
            Payload::Operator { operator, .. } => write!(f, "{operator}"),
        }
    }
}
