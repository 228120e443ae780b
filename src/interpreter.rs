/// Settings for an evaluation session.
///
/// Arena sizes, the line buffer size, the lookahead bound, and the
/// exponentiation mode, each with the defaults the command line starts from.
pub mod config;
/// The evaluator module reduces expression trees to values.
///
/// The evaluator walks the tree bottom-up, promoting operands to float where
/// needed and applying each operator.
///
/// # Responsibilities
/// - Evaluates every node of a parsed line, children first.
/// - Applies the integer/float promotion rule at every operation.
/// - Reports integer overflow and malformed trees.
pub mod evaluator;
/// The lexer module tokenizes an input line on demand.
///
/// The lexer reads the raw line and produces integer literals and operator
/// tokens one at a time, with a bounded stack of peeked tokens that can be
/// pushed back.
///
/// # Responsibilities
/// - Recognizes digit runs with optional `h`/`b` suffixes and the operators
///   `+ - * / < > **`.
/// - Rejects letters and adjacent operators.
/// - Copies every lexeme into the transient arena.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser uses precedence climbing to turn the token stream into a binary
/// tree whose nodes live for one evaluation only.
///
/// # Responsibilities
/// - Orders operators by precedence and keeps equal precedence
///   left-associative.
/// - Rejects missing operands and trailing tokens.
pub mod parser;
/// One evaluation cycle after another.
///
/// A session owns both arenas, resets the transient one before each line, and
/// renders results into the output buffer.
pub mod session;
/// Token definitions shared by the lexer, parser, and evaluator.
pub mod token;
/// The value module defines the result of an evaluation.
///
/// A value is either a 64-bit integer or a 32-bit float, and renders as a
/// plain integer or with two decimal places.
pub mod value;
