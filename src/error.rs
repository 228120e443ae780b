/// Arena allocation errors.
///
/// Raised when a bump arena cannot satisfy a request. These are never
/// syntax errors; they are propagated up through the lexer, parser, and
/// session instead of being silently ignored.
pub mod arena_error;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// input line: adjacent operators, unsupported characters, missing operands,
/// trailing tokens, and lookahead misuse.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while reducing an expression
/// tree to a value, such as integer overflow.
pub mod runtime_error;

pub use arena_error::ArenaError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Text rendered for every syntax error.
pub const SYNTAX_ERROR: &str = "Syntax error";

#[derive(Debug)]
/// Any failure of a single evaluation cycle.
pub enum Error {
    /// The line could not be tokenized or parsed.
    Parse(ParseError),
    /// The tree could not be reduced to a value.
    Runtime(RuntimeError),
    /// An arena could not satisfy an allocation outside of parsing.
    Memory(ArenaError),
    /// The line does not fit in the input buffer.
    InputTooLong {
        /// Length of the rejected line in bytes.
        length:   usize,
        /// Size of the input buffer, terminator included.
        capacity: usize,
    },
}

impl Error {
    /// Returns `true` when the failure should be reported as
    /// [`SYNTAX_ERROR`].
    #[must_use]
    pub const fn is_syntax_error(&self) -> bool {
        match self {
            Self::Parse(e) => e.is_syntax_error(),
            Self::Runtime(_) | Self::Memory(_) | Self::InputTooLong { .. } => false,
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl From<ArenaError> for Error {
    fn from(e: ArenaError) -> Self {
        Self::Memory(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::Memory(e) => write!(f, "{e}"),
            Self::InputTooLong { length, capacity } => write!(f,
                                                              "Error: Input of {length} bytes does not fit in a {capacity} byte line buffer."),
        }
    }
}

impl std::error::Error for Error {}
