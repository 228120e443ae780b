//! # calc
//!
//! calc is an immediate-mode arithmetic expression evaluator written in Rust.
//! It takes one line of integer literals joined by the binary operators
//! `+ - * / < > **` and reduces it to a single integer or float, or reports a
//! syntax error. Every line is lexed, parsed, and evaluated inside a bump
//! arena that is reset before the next one.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{config::EvalConfig, session::Session, value::Value},
};

/// Fixed-capacity bump allocation.
///
/// This module provides the arenas that back every evaluation. An arena hands
/// out zero-initialized, 8-byte-rounded regions of one pre-sized buffer and
/// only ever releases them all at once.
///
/// # Responsibilities
/// - Enforces `used <= capacity` and reports exhaustion as an error.
/// - Stores NUL-terminated lexemes and line buffers.
pub mod arena;
/// Defines the structure of parsed lines.
///
/// This module declares the binary operators and the index-linked tree of
/// literal and binary nodes built by the parser and read by the evaluator.
pub mod ast;
/// Provides unified error types for allocation, parsing, and evaluation.
///
/// This module defines all errors that can be raised while evaluating a line
/// and decides which of them are reported to the user as a syntax error.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (arena, parser, evaluator).
/// - Attaches input positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation of a line.
///
/// This module ties together lexing, parsing, evaluation, and the session that
/// owns the arenas, and exposes the public API for evaluating expressions.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric conversion.
///
/// Provides the casts between integer and floating-point types used by the
/// evaluator.
pub mod util;

/// Evaluates a single line with a fresh session and default settings.
///
/// Returns `Ok(None)` if the line contains no expression.
///
/// # Errors
/// Returns an error if the line is malformed, does not fit in memory, or
/// overflows during evaluation.
///
/// # Examples
/// ```
/// use calc::{get_result, interpreter::value::Value};
///
/// assert_eq!(get_result("10 - 3 - 2").unwrap(), Some(Value::Integer(5)));
/// assert_eq!(get_result("1 / 4").unwrap(), Some(Value::Float(0.25)));
///
/// // Letters are not part of the language.
/// assert!(get_result("x + 1").unwrap_err().is_syntax_error());
/// ```
pub fn get_result(source: &str) -> Result<Option<Value>, Error> {
    let mut session = Session::new(EvalConfig::default())?;

    session.evaluate(source)
}
