use crate::error::ArenaError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// An operator is directly followed by another operator.
    AdjacentOperators {
        /// Byte offset just past the first operator.
        position: usize,
    },
    /// A letter was found; identifiers and functions are not supported.
    UnsupportedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// An operand was expected but an operator or the end of input was found.
    ExpectedOperand {
        /// Byte offset where the operand was expected.
        position: usize,
    },
    /// Found extra tokens after the expression was complete.
    UnexpectedTrailingTokens {
        /// The extra token.
        token:    String,
        /// Byte offset just past the extra token.
        position: usize,
    },
    /// More tokens were peeked than the lookahead buffer can hold.
    LookaheadOverflow {
        /// The configured lookahead depth.
        depth: usize,
    },
    /// A token was pushed back or committed without a matching peek.
    PushBackWithoutPeek {
        /// Byte offset of the lexer when the request was made.
        position: usize,
    },
    /// An integer literal does not fit in 64 bits.
    LiteralTooLarge {
        /// Byte offset just past the literal.
        position: usize,
    },
    /// The transient arena could not hold a lexeme or tree node.
    OutOfMemory(ArenaError),
}

impl ParseError {
    /// Returns `true` for errors caused by the shape of the input rather than
    /// by resource exhaustion.
    #[must_use]
    pub const fn is_syntax_error(&self) -> bool {
        !matches!(self, Self::OutOfMemory(_))
    }
}

impl From<ArenaError> for ParseError {
    fn from(e: ArenaError) -> Self {
        Self::OutOfMemory(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AdjacentOperators { position } => write!(f,
                                                           "Error at position {position}: Two operators with no operand between them."),
            Self::UnsupportedCharacter { character, position } => write!(f,
                                                                         "Error at position {position}: Unsupported character '{character}'."),
            Self::ExpectedOperand { position } => {
                write!(f, "Error at position {position}: Expected an operand.")
            },
            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Error at position {position}: Extra tokens after expression. Check your input: {token}"),
            Self::LookaheadOverflow { depth } => {
                write!(f, "Error: Lookahead exceeded its depth of {depth} tokens.")
            },
            Self::PushBackWithoutPeek { position } => write!(f,
                                                             "Error at position {position}: Nothing to push back."),
            Self::LiteralTooLarge { position } => {
                write!(f, "Error at position {position}: Literal is too large.")
            },
            Self::OutOfMemory(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {}
