use crate::{
    arena::Arena,
    ast::{Node, NodeId, Tree},
    error::ParseError,
    interpreter::{lexer::Lexer, parser::core::ParseResult},
};

/// Parses an expression whose operators bind at least as tightly as
/// `min_precedence`.
///
/// The rule is: `expression := operand (operator expression)*`
///
/// After the first operand, each operator is peeked. An operator below
/// `min_precedence` is pushed back and left for the caller. Otherwise it is
/// committed and its right-hand side is parsed with a minimum one above its
/// own precedence, so operators of equal precedence keep folding into the
/// left side: `10 - 3 - 2` parses as `(10 - 3) - 2`.
///
/// A literal where an operator belongs has precedence `0`, so it is pushed
/// back too and reported by the caller.
///
/// # Parameters
/// - `lexer`: Token source.
/// - `arena`: Transient arena for lexemes and nodes.
/// - `tree`: Tree receiving the nodes.
/// - `min_precedence`: Weakest operator this call may consume.
///
/// # Returns
/// The root of the parsed expression, or `None` if the input was already
/// exhausted.
///
/// # Errors
/// Returns `ExpectedOperand` when an operator appears where an operand is
/// required, or when the input ends right after an operator.
pub fn parse_expression(lexer: &mut Lexer<'_>,
                        arena: &mut Arena,
                        tree: &mut Tree,
                        min_precedence: u8)
                        -> ParseResult<Option<NodeId>> {
    let Some(first) = lexer.next_token(arena)? else {
        return Ok(None);
    };

    if first.kind.is_operator() {
        return Err(ParseError::ExpectedOperand { position: first.end });
    }

    let mut left = tree.push(arena, Node::Literal(first))?;

    while let Some(operator) = lexer.peek_token(arena)? {
        let precedence = operator.kind.precedence();
        if precedence < min_precedence {
            lexer.push_back()?;
            break;
        }

        lexer.commit()?;

        let right = parse_expression(lexer, arena, tree, precedence + 1)?
            .ok_or(ParseError::ExpectedOperand { position: lexer.position() })?;

        left = tree.push(arena, Node::Binary { operator, left, right })?;
    }

    Ok(Some(left))
}
