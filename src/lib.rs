//! # Introduction
//!
//! cparen parses a single C expression and re-emits it with every compound
//! sub-expression explicitly parenthesized, making the grouping that C's
//! precedence and associativity rules impose visible in the text itself:
//! `a+b*c` comes back as `a + (b * c)`.
//!
//! ## Pipeline
//!
//! ```text
//! Text → Lexer → Tokens → Parser (+ TypeRegistry) → AST → Generator → Text
//! ```
//!
//! 1. [`parser`] — tokenises the input and builds an expression AST,
//!    consulting a [`TypeRegistry`] to tell casts apart from parenthesized
//!    expressions.
//! 2. [`generator`] — renders the AST back to text with per-node-kind
//!    parenthesization policy.
//!
//! The library never writes to any output stream; callers get either the
//! rendered string or a structured [`Error`].
//!
//! ## Example
//!
//! ```
//! use cparen::{parenthesize, TypeRegistry};
//!
//! let registry = TypeRegistry::new();
//! let out = parenthesize("a + b * c", &registry).unwrap();
//! assert_eq!(out, "a + (b * c)");
//! ```

pub mod generator;
pub mod parser;

use std::fmt;

pub use parser::{Expr, LexError, ParseError, Parser, SourceLocation, TypeRegistry};

/// Error returned by [`parenthesize`], distinguishing the two failure modes.
///
/// Both are terminal for the current parse: no retry, no partial tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed token: unterminated literal, illegal character.
    Lex(LexError),
    /// Token sequence not reducible by the expression grammar, including
    /// unexpected end of input and trailing input after a complete
    /// expression.
    Parse(ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex(e) => e.fmt(f),
            Error::Parse(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(e) => Some(e),
            Error::Parse(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Error::Lex(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

/// Parse one C expression and return it explicitly parenthesized.
///
/// A trailing `;` (statement habit) is stripped before parsing. The
/// rendering uses single spaces as the only inter-token whitespace and has
/// no trailing newline.
pub fn parenthesize(source: &str, types: &TypeRegistry) -> Result<String, Error> {
    let source = source.trim_end().trim_end_matches(';');
    let mut parser = Parser::new(source, types)?;
    let expr = parser.parse()?;
    Ok(generator::render(&expr))
}
