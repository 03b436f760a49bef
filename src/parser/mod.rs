//! C expression parser
//!
//! This module transforms C expression text into an abstract syntax tree:
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`registry`]: Type-name set consulted to disambiguate casts
//! - [`parse`] / [`expressions`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Supported grammar
//!
//! The full C expression sublanguage: literals, identifiers, calls,
//! array/member access, prefix/postfix unary operators, casts, `sizeof`,
//! all binary operators through the comma level, ternary, and the
//! assignment family. Statements, declarations, and the preprocessor are
//! out of scope; type names appear only as cast targets and `sizeof`
//! operands.
//!
//! # Parser implementation
//!
//! Hand-written recursive descent with one method per precedence level.
//! No parser generator dependencies. The cast/parenthesized-expression
//! ambiguity is resolved against the read-only [`registry::TypeRegistry`]
//! threaded through the parser.

pub mod ast;
pub mod expressions;
pub mod lexer;
pub mod parse;
pub mod registry;

pub use ast::Expr;
pub use lexer::{LexError, SourceLocation};
pub use parse::{ParseError, Parser};
pub use registry::TypeRegistry;
