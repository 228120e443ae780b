use crate::{
    arena::{Arena, Region},
    ast::Tree,
    error::{ArenaError, Error, SYNTAX_ERROR},
    interpreter::{
        config::EvalConfig, evaluator::core::Context, lexer::Lexer, parser::core::parse_line,
        value::Value,
    },
};

/// Owns the memory of successive evaluations.
///
/// The permanent arena holds the input and output line buffers for the whole
/// life of the session. The transient arena holds the lexemes and tree nodes
/// of the current line and is reset at the start of every evaluation, so
/// nothing allocated for one line survives into the next.
///
/// A session evaluates one line at a time; concurrent evaluations each need
/// their own session.
#[derive(Debug)]
pub struct Session {
    config:    EvalConfig,
    permanent: Arena,
    transient: Arena,
    tree:      Tree,
    input:     Region,
    output:    Region,
}

impl Session {
    /// Creates a session and reserves its line buffers.
    ///
    /// # Errors
    /// Fails if the permanent arena cannot hold both line buffers.
    pub fn new(config: EvalConfig) -> Result<Self, ArenaError> {
        let mut permanent = Arena::new("permanent", config.permanent_capacity);
        let input = permanent.allocate(config.line_capacity)?;
        let output = permanent.allocate(config.line_capacity)?;

        Ok(Self { config,
                  permanent,
                  transient: Arena::new("transient", config.transient_capacity),
                  tree: Tree::new(),
                  input,
                  output })
    }

    /// Runs one evaluation cycle over `line`.
    ///
    /// Returns `Ok(None)` when the line holds no expression.
    ///
    /// # Errors
    /// - `InputTooLong` if the line and its terminator exceed the input
    ///   buffer.
    /// - `Parse` for syntax errors and transient arena exhaustion.
    /// - `Runtime` for evaluation failures such as integer overflow.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::{config::EvalConfig, session::Session, value::Value};
    ///
    /// let mut session = Session::new(EvalConfig::default()).unwrap();
    ///
    /// assert_eq!(session.evaluate("2 + 3 * 4").unwrap(), Some(Value::Integer(14)));
    /// assert_eq!(session.evaluate("").unwrap(), None);
    /// assert!(session.evaluate("1 + * 2").unwrap_err().is_syntax_error());
    /// ```
    pub fn evaluate(&mut self, line: &str) -> Result<Option<Value>, Error> {
        self.transient.reset();
        self.tree.clear();
        self.load_input(line)?;

        let Self { config,
                   permanent,
                   transient,
                   tree,
                   input,
                   .. } = self;

        let source = permanent.read_terminated(*input);
        let mut lexer = Lexer::new(source, config.lookahead_depth);

        let Some(root) = parse_line(&mut lexer, transient, tree)? else {
            tracing::debug!("no expression");
            return Ok(None);
        };

        let value = Context::new(config.exponent).eval(tree, root)?;
        tracing::debug!(%value,
                        kind = ?value.kind(),
                        transient_used = transient.used(),
                        "evaluated");

        Ok(Some(value))
    }

    /// Evaluates `line` and renders the outcome into the output buffer.
    ///
    /// Floats render with two decimal places and integers in plain decimal.
    /// Every syntax error renders as `Syntax error`; other failures render
    /// their message. Returns `None` when the line holds no expression.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::{config::EvalConfig, session::Session};
    ///
    /// let mut session = Session::new(EvalConfig::default()).unwrap();
    ///
    /// assert_eq!(session.render("7 / 2"), Some("3.50"));
    /// assert_eq!(session.render("2 *"), Some("Syntax error"));
    /// assert_eq!(session.render("  "), None);
    /// ```
    pub fn render(&mut self, line: &str) -> Option<&str> {
        let text = match self.evaluate(line) {
            Ok(None) => return None,
            Ok(Some(value)) => value.to_string(),
            Err(e) if e.is_syntax_error() => {
                tracing::debug!(error = %e, "syntax error");
                SYNTAX_ERROR.to_string()
            },
            Err(e) => e.to_string(),
        };

        self.permanent.write_terminated(self.output, &text);

        Some(self.permanent.read_terminated(self.output))
    }

    /// Copies `line` into the input buffer, terminator included.
    fn load_input(&mut self, line: &str) -> Result<(), Error> {
        if line.len() >= self.input.len() {
            return Err(Error::InputTooLong { length:   line.len(),
                                             capacity: self.input.len(), });
        }

        self.permanent.write_terminated(self.input, line);

        Ok(())
    }

    /// The settings the session was created with.
    #[must_use]
    pub const fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// The arena holding the line buffers.
    #[must_use]
    pub const fn permanent(&self) -> &Arena {
        &self.permanent
    }

    /// The arena holding the current line's lexemes and nodes.
    #[must_use]
    pub const fn transient(&self) -> &Arena {
        &self.transient
    }

    /// The tree of the most recently parsed line.
    #[must_use]
    pub const fn tree(&self) -> &Tree {
        &self.tree
    }
}
