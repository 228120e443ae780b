use calc::{
    arena::Arena,
    ast::{BinaryOperator, Node, Tree},
    error::{Error, ParseError, RuntimeError},
    get_result,
    interpreter::{
        config::{EvalConfig, ExponentMode},
        evaluator::core::Context,
        session::Session,
        token::{Token, TokenKind},
        value::Value,
    },
};

fn evaluate(src: &str) -> Value {
    match get_result(src) {
        Ok(Some(value)) => value,
        Ok(None) => panic!("'{src}' produced no value"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn evaluate_with(src: &str, exponent: ExponentMode) -> Value {
    let mut session = Session::new(EvalConfig { exponent,
                                                ..EvalConfig::default() }).unwrap();
    session.evaluate(src).unwrap().unwrap()
}

fn assert_syntax_error(src: &str) {
    match get_result(src) {
        Err(e) if e.is_syntax_error() => {},
        other => panic!("'{src}' should be a syntax error, got {other:?}"),
    }
}

fn render(src: &str) -> Option<String> {
    let mut session = Session::new(EvalConfig::default()).unwrap();
    session.render(src).map(str::to_string)
}

#[test]
fn integer_arithmetic_stays_integer() {
    assert_eq!(evaluate("3 + 4"), Value::Integer(7));
    assert_eq!(evaluate("3 - 10"), Value::Integer(-7));
    assert_eq!(evaluate("6 * 7"), Value::Integer(42));
}

#[test]
fn division_always_yields_float() {
    assert_eq!(evaluate("7 / 2"), Value::Float(3.5));
    assert_eq!(evaluate("8 / 2"), Value::Float(4.0));
    assert_eq!(render("8 / 2").as_deref(), Some("4.00"));
}

#[test]
fn float_poisons_only_its_ancestors() {
    let mut session = Session::new(EvalConfig::default()).unwrap();
    assert_eq!(session.evaluate("1 / 2 + 3 * 4").unwrap(), Some(Value::Float(12.5)));

    let tree = session.tree();
    let Some(Node::Binary { left, right, .. }) = tree.root().and_then(|root| tree.get(root))
    else {
        panic!("root should be a binary node");
    };

    let context = Context::default();
    assert_eq!(context.eval(tree, *left).unwrap(), Value::Float(0.5));
    assert_eq!(context.eval(tree, *right).unwrap(), Value::Integer(12));
}

#[test]
fn hand_built_trees_evaluate() {
    let mut arena = Arena::new("transient", 512);
    let mut tree = Tree::new();

    let base = tree.push(&mut arena, Node::Literal(Token::float(1.5, 3))).unwrap();
    let exponent = tree.push(&mut arena, Node::Literal(Token::integer(TokenKind::Integer, 3, 8)))
                       .unwrap();
    let power = Token::operator(BinaryOperator::Pow, arena.allocate_str("$").unwrap(), 6);
    let root = tree.push(&mut arena,
                         Node::Binary { operator: power,
                                        left:     base,
                                        right:    exponent, })
                   .unwrap();

    assert_eq!(tree.root(), Some(root));
    assert_eq!(tree.get(root).and_then(|node| node.token().as_operator()),
               Some(BinaryOperator::Pow));
    assert_eq!(tree.get(base).map(|node| node.token().kind), Some(TokenKind::Float));
    let value = Context::default().eval(&tree, root).unwrap();
    assert!(value.is_float());
    assert_eq!(value, Value::Float(5.0625));

    let stray = tree.push(&mut arena, Node::Literal(power)).unwrap();
    assert!(matches!(Context::default().eval(&tree, stray),
                     Err(RuntimeError::MalformedTree { .. })));
}

#[test]
fn equal_precedence_is_left_associative() {
    assert_eq!(evaluate("10 - 3 - 2"), Value::Integer(5));
    assert_eq!(evaluate("16 / 4 / 2"), Value::Float(2.0));
    assert_eq!(evaluate("2 ** 2 ** 2"), Value::Integer(16));
}

#[test]
fn precedence_ordering() {
    assert_eq!(evaluate("2 + 3 * 4"), Value::Integer(14));
    assert_eq!(evaluate("2 * 3 + 4"), Value::Integer(10));
    assert_eq!(evaluate("1 + 2 < 2 * 2"), Value::Integer(1));
    assert_eq!(evaluate("2 * 3 ** 2"), Value::Integer(18));
}

#[test]
fn comparisons_yield_one_or_zero() {
    assert_eq!(evaluate("1 < 2"), Value::Integer(1));
    assert_eq!(evaluate("2 > 3"), Value::Integer(0));
    assert_eq!(evaluate("1 / 2 < 1"), Value::Float(1.0));
}

#[test]
fn adjacent_operators_are_rejected() {
    assert_syntax_error("1 + * 2");
    assert_syntax_error("1 ** * 2");
    assert_eq!(render("1 + * 2").as_deref(), Some("Syntax error"));
}

#[test]
fn missing_operands_are_rejected() {
    assert_syntax_error("* 2");
    assert_syntax_error("2 *");
    assert_syntax_error("- 5");
}

#[test]
fn letters_and_trailing_literals_are_rejected() {
    assert_syntax_error("x");
    assert_syntax_error("2 * x");
    assert!(matches!(get_result("1 2"),
                     Err(Error::Parse(ParseError::UnexpectedTrailingTokens { .. }))));
}

#[test]
fn unsupported_characters_end_the_input() {
    assert_eq!(evaluate("1 + 2 ? 3"), Value::Integer(3));
    assert_eq!(evaluate("2.5 + 1"), Value::Integer(2));
}

#[test]
fn empty_input_is_not_an_error() {
    assert_eq!(get_result("").unwrap(), None);
    assert_eq!(get_result("    ").unwrap(), None);
    assert_eq!(render(""), None);
}

#[test]
fn literal_suffixes_keep_decimal_values() {
    assert_eq!(evaluate("10h + 1"), Value::Integer(11));
    assert_eq!(evaluate("101b * 2"), Value::Integer(202));
}

#[test]
fn squaring_exponent_rules() {
    assert_eq!(evaluate("5 $ 0"), Value::Integer(0));
    assert_eq!(evaluate("5 ** 0"), Value::Integer(0));
    assert_eq!(evaluate("2 ** 3"), Value::Integer(16));
    assert_eq!(evaluate("2 ** 6"), Value::Integer(4_294_967_296));
    assert_eq!(evaluate("7 ** 1"), Value::Integer(7));
    assert_eq!(evaluate("1 ** 1000000000000"), Value::Integer(1));
    assert_eq!(evaluate("1 / 2 ** 3"), Value::Float(0.0625));
}

#[test]
fn standard_exponent_rules() {
    assert_eq!(evaluate_with("2 ** 3", ExponentMode::Standard), Value::Integer(8));
    assert_eq!(evaluate_with("5 ** 0", ExponentMode::Standard), Value::Integer(1));
    assert_eq!(evaluate_with("3 / 2 ** 2", ExponentMode::Standard), Value::Float(0.75));

    let standard = Context::new(ExponentMode::Standard);
    assert_eq!(standard.eval_integer_pow(2, -1).unwrap(), Value::Float(0.5));
    assert_eq!(standard.eval_integer_pow(1, 1 << 40).unwrap(), Value::Integer(1));
    assert_eq!(standard.eval_integer_pow(-1, (1 << 40) + 1).unwrap(), Value::Integer(-1));
    assert!(standard.eval_integer_pow(2, 1 << 40).is_err());
}

#[test]
fn float_exponents_truncate_to_a_count() {
    let squaring = Context::new(ExponentMode::Squaring);
    assert_eq!(squaring.eval_float_pow(1.5, 3.7), 5.0625);
    assert_eq!(squaring.eval_float_pow(1.5, 0.9), 0.0);
    assert_eq!(squaring.eval_float_pow(1.5, -2.0), 1.5);
    assert_eq!(squaring.eval_float_pow(0.5, 1.0e9), 0.0);
}

#[test]
fn integer_overflow_is_a_runtime_error() {
    let err = get_result("9223372036854775807 + 1").unwrap_err();
    assert!(matches!(err, Error::Runtime(RuntimeError::Overflow { .. })));
    assert!(!err.is_syntax_error());

    assert!(get_result("2 ** 7").is_err());
    assert!(render("2 ** 7").unwrap().contains("overflow"));
}

#[test]
fn exhausted_arena_is_not_a_syntax_error() {
    let mut session = Session::new(EvalConfig { transient_capacity: 16,
                                                ..EvalConfig::default() }).unwrap();

    let err = session.evaluate("1 + 2 + 3").unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::OutOfMemory(_))));
    assert!(!err.is_syntax_error());
    assert!(session.transient().used() <= session.transient().capacity());

    assert_eq!(session.evaluate("").unwrap(), None);
}

#[test]
fn overlong_lines_are_rejected() {
    let line = "1 + ".repeat(200) + "1";
    assert!(matches!(get_result(&line), Err(Error::InputTooLong { .. })));
}

#[test]
fn longest_line_fits_in_default_memory() {
    let mut session = Session::new(EvalConfig::default()).unwrap();
    let capacity = session.config().line_capacity;
    assert_eq!(session.permanent().used(), 2 * capacity);

    // One byte is kept for the terminator.
    let operands = capacity / 2;
    let line = vec!["1"; operands].join("+");
    assert_eq!(line.len(), capacity - 1);
    assert_eq!(session.render(&line), Some(operands.to_string().as_str()));
    assert!(session.transient().used() <= session.transient().capacity());

    let too_long = format!("1{line}");
    assert!(matches!(session.evaluate(&too_long),
                     Err(Error::InputTooLong { length: 512, capacity: 512 })));
}

#[test]
fn longest_line_with_every_operator_fits() {
    let mut session = Session::new(EvalConfig::default()).unwrap();
    let glyphs = ['$', '*', '+', '<', '-', '/', '>'];

    let mut line = String::from("1");
    for glyph in glyphs.iter().cycle().take(session.config().line_capacity / 2 - 1) {
        line.push(*glyph);
        line.push('1');
    }
    assert_eq!(line.len(), session.config().line_capacity - 1);

    assert!(matches!(session.evaluate(&line), Ok(Some(_))));
}

#[test]
fn sessions_reset_between_lines() {
    let mut session = Session::new(EvalConfig::default()).unwrap();

    assert_eq!(session.evaluate("1 + 2 + 3 + 4").unwrap(), Some(Value::Integer(10)));
    let used = session.transient().used();

    assert_eq!(session.evaluate("5").unwrap(), Some(Value::Integer(5)));
    assert!(session.transient().used() < used);
    assert_eq!(session.tree().len(), 1);

    assert_eq!(session.render("1 + * 2"), Some("Syntax error"));
    assert_eq!(session.render("1 / 3 + 2"), Some("2.33"));
}
