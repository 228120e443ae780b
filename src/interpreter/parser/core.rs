use crate::{
    arena::Arena,
    ast::{NodeId, Tree},
    error::ParseError,
    interpreter::{lexer::Lexer, parser::binary::parse_expression},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Minimum precedence accepted at the top of a line; every operator kind
/// reaches it.
pub const LOWEST_PRECEDENCE: u8 = 1;

/// Parses a full line into `tree`.
///
/// Returns `Ok(None)` when the line holds no expression at all, which is not
/// an error. Otherwise every token up to the end of the recognizable input
/// must belong to the expression.
///
/// # Parameters
/// - `lexer`: Lexer positioned at the start of the line.
/// - `arena`: Transient arena receiving lexemes and nodes.
/// - `tree`: Tree the nodes are appended to.
///
/// # Returns
/// The root node, if any.
///
/// # Errors
/// - Any lexer error, such as adjacent operators or a letter.
/// - `ExpectedOperand` if an operator is missing an operand.
/// - `UnexpectedTrailingTokens` if a literal follows a complete expression.
///
/// # Example
/// ```
/// use calc::{
///     arena::Arena,
///     ast::Tree,
///     interpreter::{lexer::Lexer, parser::core::parse_line},
/// };
///
/// let mut arena = Arena::new("transient", 1024);
/// let mut tree = Tree::new();
///
/// let root = parse_line(&mut Lexer::new("2 + 3 * 4", 32), &mut arena, &mut tree).unwrap();
/// assert!(root.is_some());
/// assert_eq!(tree.len(), 5);
///
/// let empty = parse_line(&mut Lexer::new("   ", 32), &mut arena, &mut tree).unwrap();
/// assert!(empty.is_none());
/// ```
pub fn parse_line(lexer: &mut Lexer<'_>,
                  arena: &mut Arena,
                  tree: &mut Tree)
                  -> ParseResult<Option<NodeId>> {
    let Some(root) = parse_expression(lexer, arena, tree, LOWEST_PRECEDENCE)? else {
        return Ok(None);
    };

    if let Some(token) = lexer.next_token(arena)? {
        return Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                          position: token.end, });
    }

    tracing::debug!(nodes = tree.len(), root = %root, "parsed line");

    Ok(Some(root))
}
