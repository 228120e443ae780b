use crate::{arena::ALIGNMENT, ast::Node};

/// Default size of the permanent arena, in bytes.
pub const PERMANENT_CAPACITY: usize = 8 * 1024;
/// Default size of the input and output line buffers, terminator included.
pub const LINE_CAPACITY: usize = 512;
/// Default size of the transient arena, in bytes.
pub const TRANSIENT_CAPACITY: usize = transient_capacity_for(LINE_CAPACITY);

/// Smallest transient arena that can hold any line fitting in
/// `line_capacity`.
///
/// Every token takes at least one input byte and costs one node plus its
/// lexeme. A lexeme of `n` bytes and its terminator round up to at most
/// `ALIGNMENT * n` bytes, so each input byte needs no more than one node and
/// one alignment unit.
///
/// # Example
/// ```
/// use calc::interpreter::config::{LINE_CAPACITY, TRANSIENT_CAPACITY, transient_capacity_for};
///
/// assert_eq!(transient_capacity_for(LINE_CAPACITY), TRANSIENT_CAPACITY);
/// assert_eq!(transient_capacity_for(0), 0);
/// ```
#[must_use]
pub const fn transient_capacity_for(line_capacity: usize) -> usize {
    line_capacity * (size_of::<Node>() + ALIGNMENT)
}
/// Default bound on the lexer's lookahead stack.
pub const LOOKAHEAD_DEPTH: usize = 32;

/// How `**` is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExponentMode {
    /// Squares the accumulator `exponent - 1` times, starting from the base,
    /// so `2 ** 3` is `16`. A zero exponent yields `0`.
    #[default]
    Squaring,
    /// Mathematical exponentiation: `2 ** 3` is `8` and `x ** 0` is `1`.
    Standard,
}

/// Settings for a [`Session`](crate::interpreter::session::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Size of the long-lived arena holding the line buffers.
    pub permanent_capacity: usize,
    /// Size of the arena reset before every evaluation.
    pub transient_capacity: usize,
    /// Size of each line buffer.
    pub line_capacity:      usize,
    /// Number of tokens the lexer may hold back.
    pub lookahead_depth:    usize,
    /// Exponentiation semantics.
    pub exponent:           ExponentMode,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self { permanent_capacity: PERMANENT_CAPACITY,
               transient_capacity: TRANSIENT_CAPACITY,
               line_capacity:      LINE_CAPACITY,
               lookahead_depth:    LOOKAHEAD_DEPTH,
               exponent:           ExponentMode::default(), }
    }
}
