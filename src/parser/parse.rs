//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing
//! infrastructure: the error type, cursor helper methods, and the main
//! entry point. The expression grammar itself lives in `expressions`,
//! which extends [`Parser`] through a second `impl` block.
//!
//! The type-name registry is threaded in as a read-only reference rather
//! than held as ambient state, so independent parses can share one
//! registry.

use crate::parser::ast::Expr;
use crate::parser::lexer::{LexError, Lexer, SourceLocation, Token};
use crate::parser::registry::TypeRegistry;
use std::fmt;

/// Parser error type
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Recursive descent parser for the C expression grammar
pub struct Parser<'t> {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    pub(crate) types: &'t TypeRegistry,
}

impl<'t> Parser<'t> {
    /// Tokenize `source` and set up a parser over the token stream.
    pub fn new(source: &str, types: &'t TypeRegistry) -> Result<Self, LexError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self {
            tokens,
            position: 0,
            types,
        })
    }

    /// Parse a single expression spanning the entire input.
    ///
    /// Trailing tokens after a complete expression are an error; parsing is
    /// all-or-nothing with no recovery.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression()?;

        if !self.is_at_end() {
            return Err(ParseError {
                message: format!(
                    "Unexpected {} after complete expression",
                    self.peek()
                ),
                location: self.current_location(),
            });
        }

        Ok(expr)
    }

    // ===== Helper methods =====

    pub(crate) fn match_token(&mut self, token: &Token) -> bool {
        if std::mem::discriminant(&self.peek_token())
            == std::mem::discriminant(token)
        {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(&self.peek_token())
            == std::mem::discriminant(token)
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek_token(), Token::Eof(_))
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn peek_token(&self) -> Token {
        self.tokens[self.position].clone()
    }

    pub(crate) fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n)
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position - 1]
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location()
    }

    pub(crate) fn expect_token(
        &mut self,
        token: &Token,
        message: &str,
    ) -> Result<(), ParseError> {
        if self.check(token) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError {
                message: format!("{}, found {}", message, self.peek()),
                location: self.current_location(),
            })
        }
    }

    pub(crate) fn expect_rparen(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(
            &Token::RParen(self.current_location()),
            &format!("Expected ')' {ctx}"),
        )
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        if let Token::Ident(name, _) = self.peek_token() {
            self.advance();
            Ok(name)
        } else {
            Err(ParseError {
                message: format!("Expected identifier, found {}", self.peek()),
                location: self.current_location(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::*;

    fn parse(source: &str) -> Result<Expr, ParseError> {
        let registry = TypeRegistry::new();
        let mut parser = Parser::new(source, &registry).expect("lexing failed");
        parser.parse()
    }

    #[test]
    fn test_parse_identifier() {
        assert_eq!(parse("x").unwrap(), Expr::Identifier("x".to_string()));
    }

    #[test]
    fn test_parse_binary() {
        let expr = parse("1 + 2").unwrap();
        match expr {
            Expr::BinaryOp { op, .. } => assert_eq!(op, BinOp::Add),
            other => panic!("Expected binary op, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_input_rejected() {
        let err = parse("a b").unwrap_err();
        assert!(err.message.contains("after complete expression"));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(parse("").is_err());
    }

    #[test]
    fn test_unexpected_eof() {
        let err = parse("(").unwrap_err();
        assert!(err.message.contains("end of input"));
    }
}
