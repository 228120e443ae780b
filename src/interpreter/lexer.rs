use logos::Logos;

use crate::{
    arena::Arena,
    ast::BinaryOperator,
    error::ParseError,
    interpreter::{
        parser::core::ParseResult,
        token::{Token, TokenKind},
    },
};

/// A raw lexical unit recognized at the current cursor.
///
/// Only spaces are skipped. Any character not listed here makes the scanner
/// return an error, which the [`Lexer`] treats as the end of the token stream.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r" +")]
pub enum RawToken {
    /// A run of decimal digits, such as `42`.
    #[regex(r"[0-9]+")]
    Digits,
    /// A digit run with an `h` suffix, such as `42h`.
    #[regex(r"[0-9]+h")]
    HexDigits,
    /// A digit run with a `b` suffix, such as `101b`.
    #[regex(r"[0-9]+b")]
    BinaryDigits,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `**`, or its internal spelling `$`.
    #[token("**")]
    #[token("$")]
    Power,
    /// A letter. Identifiers are not part of the language.
    #[regex(r"[a-zA-Z]")]
    Letter,
}

/// Returns `true` for every character that starts an operator.
#[must_use]
pub const fn is_operator_glyph(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '<' | '>' | '$')
}

/// Turns one input line into tokens on demand.
///
/// The lexer keeps a byte cursor into the input and a bounded stack of
/// peeked tokens. [`Lexer::peek_token`] advances the cursor and remembers how
/// far it moved. [`Lexer::push_back`] undoes that move so the next call
/// returns the same token again, and [`Lexer::commit`] accepts it.
///
/// Lexemes are copied into the arena passed to each call. A pushed-back token
/// is replayed rather than lexed again, so every token of a line is charged
/// to the arena exactly once.
#[derive(Debug)]
pub struct Lexer<'src> {
    input:     &'src str,
    cursor:    usize,
    lookahead: Vec<(Token, usize)>,
    replay:    Vec<(Token, usize)>,
    depth:     usize,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `input` that can hold up to `depth` peeked
    /// tokens.
    #[must_use]
    pub fn new(input: &'src str, depth: usize) -> Self {
        Self { input,
               cursor: 0,
               lookahead: Vec::with_capacity(depth),
               replay: Vec::with_capacity(depth),
               depth }
    }

    /// Current byte offset into the input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Number of peeked tokens not yet pushed back or committed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.lookahead.len()
    }

    /// Consumes and returns the next token.
    ///
    /// Returns `Ok(None)` at the end of input, and also when the next
    /// character is one the language does not recognize.
    ///
    /// # Example
    /// ```
    /// use calc::{
    ///     arena::Arena,
    ///     interpreter::{lexer::Lexer, token::TokenKind},
    /// };
    ///
    /// let mut arena = Arena::new("transient", 256);
    /// let mut lexer = Lexer::new("12 ** 3h", 32);
    ///
    /// let kinds: Vec<_> =
    ///     std::iter::from_fn(|| lexer.next_token(&mut arena).unwrap()).map(|t| t.kind)
    ///                                                                  .collect();
    ///
    /// assert_eq!(kinds,
    ///            [TokenKind::Integer, TokenKind::Exponent, TokenKind::HexInteger]);
    /// ```
    pub fn next_token(&mut self, arena: &mut Arena) -> ParseResult<Option<Token>> {
        Ok(self.scan(arena)?.map(|(token, _)| token))
    }

    /// Consumes the next token and remembers it on the lookahead stack.
    ///
    /// # Errors
    /// Fails with [`ParseError::LookaheadOverflow`] when the stack is full,
    /// leaving the cursor where it was.
    pub fn peek_token(&mut self, arena: &mut Arena) -> ParseResult<Option<Token>> {
        if self.lookahead.len() >= self.depth {
            return Err(ParseError::LookaheadOverflow { depth: self.depth });
        }

        let Some((token, consumed)) = self.scan(arena)? else {
            return Ok(None);
        };

        self.lookahead.push((token, consumed));
        tracing::trace!(%token, depth = self.lookahead.len(), "peeked");

        Ok(Some(token))
    }

    /// Un-consumes the most recently peeked token.
    ///
    /// The cursor is rewound to exactly where it was before the peek.
    pub fn push_back(&mut self) -> ParseResult<Token> {
        let (token, consumed) =
            self.lookahead
                .pop()
                .ok_or(ParseError::PushBackWithoutPeek { position: self.cursor })?;

        self.cursor -= consumed;
        self.replay.push((token, consumed));
        tracing::trace!(%token, position = self.cursor, "pushed back");

        Ok(token)
    }

    /// Accepts the most recently peeked token, dropping it from the stack.
    pub fn commit(&mut self) -> ParseResult<Token> {
        self.lookahead
            .pop()
            .map(|(token, _)| token)
            .ok_or(ParseError::PushBackWithoutPeek { position: self.cursor })
    }

    /// Lexes one token at the cursor and advances past it.
    ///
    /// Returns the token together with the number of bytes consumed,
    /// including any leading spaces.
    fn scan(&mut self, arena: &mut Arena) -> ParseResult<Option<(Token, usize)>> {
        if let Some((token, consumed)) = self.replay.pop() {
            self.cursor += consumed;
            tracing::trace!(%token, "replayed");
            return Ok(Some((token, consumed)));
        }

        let rest = self.input.get(self.cursor..).unwrap_or_default();
        let mut raw = RawToken::lexer(rest);

        let Some(result) = raw.next() else {
            return Ok(None);
        };

        let start = self.cursor + raw.span().start;
        let end = self.cursor + raw.span().end;
        let slice = raw.slice();

        let token = match result {
            Err(()) => {
                tracing::debug!(position = start, "unrecognized character ends the input");
                return Ok(None);
            },
            Ok(RawToken::Letter) => {
                return Err(ParseError::UnsupportedCharacter { character:
                                                                  slice.chars()
                                                                       .next()
                                                                       .unwrap_or_default(),
                                                              position:  start, });
            },
            Ok(RawToken::Digits) => Self::integer(arena, slice, TokenKind::Integer, end)?,
            Ok(RawToken::HexDigits) => {
                Self::integer(arena, &slice[..slice.len() - 1], TokenKind::HexInteger, end)?
            },
            Ok(RawToken::BinaryDigits) => {
                Self::integer(arena, &slice[..slice.len() - 1], TokenKind::BinaryInteger, end)?
            },
            Ok(RawToken::Less) => self.operator(arena, BinaryOperator::Less, end)?,
            Ok(RawToken::Greater) => self.operator(arena, BinaryOperator::Greater, end)?,
            Ok(RawToken::Plus) => self.operator(arena, BinaryOperator::Add, end)?,
            Ok(RawToken::Minus) => self.operator(arena, BinaryOperator::Sub, end)?,
            Ok(RawToken::Star) => self.operator(arena, BinaryOperator::Mul, end)?,
            Ok(RawToken::Slash) => self.operator(arena, BinaryOperator::Div, end)?,
            Ok(RawToken::Power) => self.operator(arena, BinaryOperator::Pow, end)?,
        };

        let consumed = end - self.cursor;
        self.cursor = end;
        tracing::debug!(%token, kind = ?token.kind, end, "token");

        Ok(Some((token, consumed)))
    }

    /// Copies a digit run into the arena and parses the copy.
    ///
    /// The value is always decimal; the suffix only selects `kind`.
    fn integer(arena: &mut Arena,
               digits: &str,
               kind: TokenKind,
               end: usize)
               -> ParseResult<Token> {
        let lexeme = arena.allocate_str(digits)?;
        let value = arena.str(lexeme)
                         .and_then(|text| text.parse::<i64>().ok())
                         .ok_or(ParseError::LiteralTooLarge { position: end })?;

        Ok(Token::integer(kind, value, end))
    }

    /// Builds an operator token ending at `end`.
    ///
    /// Another operator after it, with only spaces in between, is a syntax
    /// error.
    fn operator(&self,
                arena: &mut Arena,
                operator: BinaryOperator,
                end: usize)
                -> ParseResult<Token> {
        let following = self.input.get(end..).unwrap_or_default();
        if following.trim_start_matches(' ').starts_with(is_operator_glyph) {
            return Err(ParseError::AdjacentOperators { position: end });
        }

        let mut glyph = [0; 4];
        let lexeme = arena.allocate_str(operator.glyph().encode_utf8(&mut glyph))?;

        Ok(Token::operator(operator, lexeme, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::token::Payload;

    fn arena() -> Arena {
        Arena::new("test", 1024)
    }

    fn drain(input: &str) -> ParseResult<Vec<Token>> {
        let mut arena = arena();
        let mut lexer = Lexer::new(input, 32);
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next_token(&mut arena)? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    #[test]
    fn literal_suffixes_change_kind_not_value() {
        let tokens = drain("12 12h 12b").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();

        assert_eq!(kinds,
                   [TokenKind::Integer, TokenKind::HexInteger, TokenKind::BinaryInteger]);
        assert!(tokens.iter().all(|t| t.payload == Payload::Integer(12)));
    }

    #[test]
    fn double_star_folds_to_exponent_glyph() {
        let mut arena = arena();
        let mut lexer = Lexer::new("2**3", 32);
        lexer.next_token(&mut arena).unwrap();
        let power = lexer.next_token(&mut arena).unwrap().unwrap();

        assert_eq!(power.as_operator(), Some(BinaryOperator::Pow));
        assert_eq!(power.end, 3);
        assert_eq!(arena.str(power.lexeme().unwrap()), Some("$"));
    }

    #[test]
    fn tokens_record_their_end() {
        let ends: Vec<_> = drain("  10 +  7").unwrap().iter().map(|t| t.end).collect();
        assert_eq!(ends, [4, 6, 9]);
    }

    #[test]
    fn push_back_restores_cursor() {
        let mut arena = arena();
        let mut lexer = Lexer::new("1   < 2", 32);
        lexer.next_token(&mut arena).unwrap();
        let before = lexer.position();

        let peeked = lexer.peek_token(&mut arena).unwrap().unwrap();
        assert_eq!(lexer.position(), 5);

        assert_eq!(lexer.push_back().unwrap(), peeked);
        assert_eq!(lexer.position(), before);
        assert_eq!(lexer.next_token(&mut arena).unwrap().unwrap().kind, peeked.kind);
    }

    #[test]
    fn pushed_back_tokens_are_not_copied_again() {
        let mut arena = arena();
        let mut lexer = Lexer::new("12 * 3", 32);
        lexer.next_token(&mut arena).unwrap();

        let peeked = lexer.peek_token(&mut arena).unwrap().unwrap();
        let used = arena.used();
        lexer.push_back().unwrap();

        let again = lexer.peek_token(&mut arena).unwrap().unwrap();
        assert_eq!(again, peeked);
        assert_eq!(lexer.position(), 4);
        lexer.push_back().unwrap();

        assert_eq!(lexer.next_token(&mut arena).unwrap(), Some(peeked));
        assert_eq!(arena.used(), used);

        lexer.next_token(&mut arena).unwrap();
        assert!(arena.used() > used);
    }

    #[test]
    fn peek_at_end_pushes_nothing() {
        let mut arena = arena();
        let mut lexer = Lexer::new("1 < 2", 32);
        for _ in 0..3 {
            lexer.next_token(&mut arena).unwrap();
        }

        assert_eq!(lexer.peek_token(&mut arena).unwrap(), None);
        assert_eq!(lexer.pending(), 0);
        assert!(lexer.push_back().is_err());
    }

    #[test]
    fn lookahead_is_bounded() {
        let mut arena = arena();
        let mut lexer = Lexer::new("1 2 3", 2);
        lexer.peek_token(&mut arena).unwrap();
        lexer.peek_token(&mut arena).unwrap();
        let position = lexer.position();

        assert_eq!(lexer.peek_token(&mut arena),
                   Err(ParseError::LookaheadOverflow { depth: 2 }));
        assert_eq!(lexer.position(), position);
    }

    #[test]
    fn adjacent_operators_are_rejected() {
        assert_eq!(drain("1 + * 2"),
                   Err(ParseError::AdjacentOperators { position: 3 }));
        assert!(drain("1 *** 2").is_err());
        assert!(drain("1 < > 2").is_err());
    }

    #[test]
    fn letters_are_rejected() {
        assert_eq!(drain("1 + x"),
                   Err(ParseError::UnsupportedCharacter { character: 'x',
                                                          position:  4, }));
    }

    #[test]
    fn unknown_character_ends_stream() {
        assert_eq!(drain("1 + 2 ? 3").unwrap().len(), 3);
        assert_eq!(drain("\t1").unwrap().len(), 0);
    }

    #[test]
    fn oversized_literal_is_rejected() {
        assert!(matches!(drain("99999999999999999999"),
                         Err(ParseError::LiteralTooLarge { .. })));
    }

    #[test]
    fn exhausted_arena_is_reported() {
        let mut arena = Arena::new("tiny", 8);
        let mut lexer = Lexer::new("1 + 2", 32);
        lexer.next_token(&mut arena).unwrap();

        assert!(matches!(lexer.next_token(&mut arena),
                         Err(ParseError::OutOfMemory(_))));
    }
}
