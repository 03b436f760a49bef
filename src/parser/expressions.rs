//! Expression grammar implementation
//!
//! One method per precedence level, highest binding innermost, following
//! the standard C expression grammar:
//!
//! postfix > unary (incl. casts and `sizeof`) > multiplicative > additive
//! > shift > relational > equality > `&` > `^` > `|` > `&&` > `||` >
//! ternary > assignment > comma.
//!
//! Binary levels are left-associative; assignment and the ternary
//! false-branch are right-associative.
//!
//! The two context-sensitive spots are handled with tentative parsing:
//! `( name ) x` is a cast exactly when `name` is in the type-name
//! registry, and `sizeof ( name )` is a sizeof-of-type under the same
//! test. Both save the cursor, attempt a type name, and rewind on
//! failure.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser<'_> {
    /// Parse expression (top-level entry point, comma level)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_assignment()?;

        while self.match_token(&Token::Comma(self.current_location())) {
            let right = Box::new(self.parse_assignment()?);
            left = Expr::BinaryOp {
                op: BinOp::Comma,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    /// Parse assignment (right-associative): target op value
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_ternary()?;

        let loc = self.current_location();
        let op = if self.match_token(&Token::Eq(loc)) {
            AssignOp::Assign
        } else if self.match_token(&Token::PlusEq(loc)) {
            AssignOp::AddAssign
        } else if self.match_token(&Token::MinusEq(loc)) {
            AssignOp::SubAssign
        } else if self.match_token(&Token::StarEq(loc)) {
            AssignOp::MulAssign
        } else if self.match_token(&Token::SlashEq(loc)) {
            AssignOp::DivAssign
        } else if self.match_token(&Token::PercentEq(loc)) {
            AssignOp::ModAssign
        } else if self.match_token(&Token::LtLtEq(loc)) {
            AssignOp::ShlAssign
        } else if self.match_token(&Token::GtGtEq(loc)) {
            AssignOp::ShrAssign
        } else if self.match_token(&Token::AmpEq(loc)) {
            AssignOp::AndAssign
        } else if self.match_token(&Token::CaretEq(loc)) {
            AssignOp::XorAssign
        } else if self.match_token(&Token::PipeEq(loc)) {
            AssignOp::OrAssign
        } else {
            return Ok(expr);
        };

        let value = Box::new(self.parse_assignment()?);
        Ok(Expr::Assignment {
            op,
            target: Box::new(expr),
            value,
        })
    }

    /// Parse ternary: condition ? then_expr : else_expr
    fn parse_ternary(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_logical_or()?;

        if self.match_token(&Token::Question(self.current_location())) {
            let then_expr = Box::new(self.parse_expression()?);
            self.expect_token(
                &Token::Colon(self.current_location()),
                "Expected ':' in ternary expression",
            )?;
            let else_expr = Box::new(self.parse_ternary()?);

            return Ok(Expr::TernaryOp {
                condition: Box::new(expr),
                then_expr,
                else_expr,
            });
        }

        Ok(expr)
    }

    /// Parse logical OR (||)
    fn parse_logical_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_logical_and()?;

        while self.match_token(&Token::OrOr(self.current_location())) {
            let right = Box::new(self.parse_logical_and()?);
            left = Expr::BinaryOp {
                op: BinOp::LogOr,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    /// Parse logical AND (&&)
    fn parse_logical_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_bitwise_or()?;

        while self.match_token(&Token::AndAnd(self.current_location())) {
            let right = Box::new(self.parse_bitwise_or()?);
            left = Expr::BinaryOp {
                op: BinOp::LogAnd,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    /// Parse bitwise OR (|)
    fn parse_bitwise_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_bitwise_xor()?;

        while self.match_token(&Token::Pipe(self.current_location())) {
            let right = Box::new(self.parse_bitwise_xor()?);
            left = Expr::BinaryOp {
                op: BinOp::BitOr,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    /// Parse bitwise XOR (^)
    fn parse_bitwise_xor(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_bitwise_and()?;

        while self.match_token(&Token::Caret(self.current_location())) {
            let right = Box::new(self.parse_bitwise_and()?);
            left = Expr::BinaryOp {
                op: BinOp::BitXor,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    /// Parse bitwise AND (&)
    fn parse_bitwise_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;

        while self.match_token(&Token::Amp(self.current_location())) {
            let right = Box::new(self.parse_equality()?);
            left = Expr::BinaryOp {
                op: BinOp::BitAnd,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    /// Parse equality (== !=)
    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_relational()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::EqEq(loc)) {
                BinOp::Eq
            } else if self.match_token(&Token::NotEq(loc)) {
                BinOp::Ne
            } else {
                break;
            };

            let right = Box::new(self.parse_relational()?);
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    /// Parse relational (< <= > >=)
    fn parse_relational(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_shift()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::Lt(loc)) {
                BinOp::Lt
            } else if self.match_token(&Token::Le(loc)) {
                BinOp::Le
            } else if self.match_token(&Token::Gt(loc)) {
                BinOp::Gt
            } else if self.match_token(&Token::Ge(loc)) {
                BinOp::Ge
            } else {
                break;
            };

            let right = Box::new(self.parse_shift()?);
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    /// Parse shift (<< >>)
    fn parse_shift(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::LtLt(loc)) {
                BinOp::Shl
            } else if self.match_token(&Token::GtGt(loc)) {
                BinOp::Shr
            } else {
                break;
            };

            let right = Box::new(self.parse_additive()?);
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::Plus(loc)) {
                BinOp::Add
            } else if self.match_token(&Token::Minus(loc)) {
                BinOp::Sub
            } else {
                break;
            };

            let right = Box::new(self.parse_multiplicative()?);
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    /// Parse multiplicative (* / %)
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_cast()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::Star(loc)) {
                BinOp::Mul
            } else if self.match_token(&Token::Slash(loc)) {
                BinOp::Div
            } else if self.match_token(&Token::Percent(loc)) {
                BinOp::Mod
            } else {
                break;
            };

            let right = Box::new(self.parse_cast()?);
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    /// Parse cast: (type-name) operand
    ///
    /// `( x ) ...` is only a cast when `x` starts a type name, which for a
    /// bare identifier means a registry lookup. The parse is tentative: the
    /// cursor is saved, and anything that fails to reduce to `( type-name )`
    /// rewinds and falls through to the unary level, where `(` introduces a
    /// parenthesized sub-expression instead.
    fn parse_cast(&mut self) -> Result<Expr, ParseError> {
        if self.check(&Token::LParen(self.current_location())) && self.starts_type_name(1) {
            let saved_pos = self.position;
            self.advance(); // consume '('

            match self.parse_type_name() {
                Ok(type_name) => {
                    if self.match_token(&Token::RParen(self.current_location())) {
                        let operand = Box::new(self.parse_cast()?);
                        return Ok(Expr::Cast { type_name, operand });
                    }
                    self.position = saved_pos;
                }
                Err(_) => self.position = saved_pos,
            }
        }

        self.parse_unary()
    }

    /// Parse unary (+ - ! ~ * & ++ -- sizeof)
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let loc = self.current_location();

        // Operand of + - ! ~ * & is a cast expression: -(int)x is valid
        let cast_operand_op = if self.match_token(&Token::Bang(loc)) {
            Some(UnOp::LogNot)
        } else if self.match_token(&Token::Tilde(loc)) {
            Some(UnOp::BitNot)
        } else if self.match_token(&Token::Minus(loc)) {
            Some(UnOp::Neg)
        } else if self.match_token(&Token::Plus(loc)) {
            Some(UnOp::Plus)
        } else if self.match_token(&Token::Amp(loc)) {
            Some(UnOp::AddrOf)
        } else if self.match_token(&Token::Star(loc)) {
            Some(UnOp::Deref)
        } else {
            None
        };

        if let Some(op) = cast_operand_op {
            let operand = Box::new(self.parse_cast()?);
            return Ok(Expr::UnaryOp { op, operand });
        }

        if self.match_token(&Token::PlusPlus(loc)) {
            let operand = Box::new(self.parse_unary()?);
            return Ok(Expr::UnaryOp {
                op: UnOp::PreInc,
                operand,
            });
        }

        if self.match_token(&Token::MinusMinus(loc)) {
            let operand = Box::new(self.parse_unary()?);
            return Ok(Expr::UnaryOp {
                op: UnOp::PreDec,
                operand,
            });
        }

        if self.match_token(&Token::Sizeof(loc)) {
            // sizeof (type-name) parses as SizeofType; anything else,
            // parenthesized or not, is sizeof of a value expression.
            if self.check(&Token::LParen(self.current_location())) && self.starts_type_name(1) {
                let saved_pos = self.position;
                self.advance(); // consume '('

                if let Ok(type_name) = self.parse_type_name() {
                    if self.match_token(&Token::RParen(self.current_location())) {
                        return Ok(Expr::SizeofType { type_name });
                    }
                }
                self.position = saved_pos;
            }

            let operand = Box::new(self.parse_unary()?);
            return Ok(Expr::UnaryOp {
                op: UnOp::Sizeof,
                operand,
            });
        }

        self.parse_postfix()
    }

    /// Parse postfix (++ -- [] . -> ())
    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;

        loop {
            let loc = self.current_location();

            if self.match_token(&Token::PlusPlus(loc)) {
                expr = Expr::UnaryOp {
                    op: UnOp::PostInc,
                    operand: Box::new(expr),
                };
            } else if self.match_token(&Token::MinusMinus(loc)) {
                expr = Expr::UnaryOp {
                    op: UnOp::PostDec,
                    operand: Box::new(expr),
                };
            } else if self.match_token(&Token::LBracket(loc)) {
                let index = Box::new(self.parse_expression()?);
                self.expect_token(
                    &Token::RBracket(self.current_location()),
                    "Expected ']' after array index",
                )?;
                expr = Expr::ArrayAccess {
                    base: Box::new(expr),
                    index,
                };
            } else if self.match_token(&Token::Dot(loc)) {
                let field = self.expect_identifier()?;
                expr = Expr::MemberAccess {
                    base: Box::new(expr),
                    field,
                    arrow: false,
                };
            } else if self.match_token(&Token::Arrow(loc)) {
                let field = self.expect_identifier()?;
                expr = Expr::MemberAccess {
                    base: Box::new(expr),
                    field,
                    arrow: true,
                };
            } else if self.match_token(&Token::LParen(loc)) {
                let args = self.parse_argument_list()?;
                self.expect_rparen("after function arguments")?;
                expr = Expr::FunctionCall {
                    callee: Box::new(expr),
                    args,
                };
            } else {
                break;
            }
        }

        Ok(expr)
    }

    /// Parse argument list: assignment-level expressions separated by commas
    ///
    /// Commas here separate arguments, never the comma operator; an argument
    /// using the comma operator must be explicitly parenthesized.
    fn parse_argument_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();

        if self.check(&Token::RParen(self.current_location())) {
            return Ok(args);
        }

        loop {
            args.push(self.parse_assignment()?);

            if !self.match_token(&Token::Comma(self.current_location())) {
                break;
            }
        }

        Ok(args)
    }

    /// Parse primary (literals, identifiers, parenthesized expressions)
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let loc = self.current_location();

        let literal = match self.peek_token() {
            Token::IntLiteral(text, _) => Some((text, LiteralKind::Int)),
            Token::FloatLiteral(text, _) => Some((text, LiteralKind::Float)),
            Token::CharLiteral(text, _) => Some((text, LiteralKind::Char)),
            Token::StringLiteral(text, _) => Some((text, LiteralKind::Str)),
            _ => None,
        };

        if let Some((text, kind)) = literal {
            self.advance();
            return Ok(Expr::Constant { text, kind });
        }

        if let Token::Ident(name, _) = self.peek_token() {
            self.advance();
            return Ok(Expr::Identifier(name));
        }

        if self.match_token(&Token::LParen(loc)) {
            let expr = self.parse_expression()?;
            self.expect_rparen("after expression")?;
            return Ok(expr);
        }

        Err(ParseError {
            message: format!("Expected expression, found {}", self.peek()),
            location: loc,
        })
    }

    /// Whether the token `n` positions ahead can start a type name
    fn starts_type_name(&self, n: usize) -> bool {
        match self.peek_ahead(n) {
            Some(Token::Int(_))
            | Some(Token::Char(_))
            | Some(Token::Void(_))
            | Some(Token::Float(_))
            | Some(Token::Double(_))
            | Some(Token::Short(_))
            | Some(Token::Long(_))
            | Some(Token::Signed(_))
            | Some(Token::Unsigned(_))
            | Some(Token::Const(_)) => true,
            Some(Token::Ident(name, _)) => self.types.is_type_name(name),
            _ => false,
        }
    }

    /// Parse type-name: [const] base [*]* [[dim]]*
    ///
    /// The base is either a run of built-in type keywords (`unsigned long`)
    /// or a single registry identifier (`size_t`).
    fn parse_type_name(&mut self) -> Result<TypeName, ParseError> {
        let mut is_const = false;
        if self.match_token(&Token::Const(self.current_location())) {
            is_const = true;
        }

        let mut keywords: Vec<&'static str> = Vec::new();
        loop {
            let loc = self.current_location();
            let kw = if self.match_token(&Token::Int(loc)) {
                "int"
            } else if self.match_token(&Token::Char(loc)) {
                "char"
            } else if self.match_token(&Token::Void(loc)) {
                "void"
            } else if self.match_token(&Token::Float(loc)) {
                "float"
            } else if self.match_token(&Token::Double(loc)) {
                "double"
            } else if self.match_token(&Token::Short(loc)) {
                "short"
            } else if self.match_token(&Token::Long(loc)) {
                "long"
            } else if self.match_token(&Token::Signed(loc)) {
                "signed"
            } else if self.match_token(&Token::Unsigned(loc)) {
                "unsigned"
            } else {
                break;
            };
            keywords.push(kw);
        }

        let base = if keywords.is_empty() {
            match self.peek_token() {
                Token::Ident(name, _) if self.types.is_type_name(&name) => {
                    self.advance();
                    name
                }
                _ => {
                    return Err(ParseError {
                        message: format!("Expected type name, found {}", self.peek()),
                        location: self.current_location(),
                    });
                }
            }
        } else {
            keywords.join(" ")
        };

        let mut pointer_depth = 0;
        while self.match_token(&Token::Star(self.current_location())) {
            pointer_depth += 1;
        }

        let mut array_dims = Vec::new();
        while self.match_token(&Token::LBracket(self.current_location())) {
            if self.check(&Token::RBracket(self.current_location())) {
                array_dims.push(None);
                self.advance();
            } else if let Token::IntLiteral(text, _) = self.peek_token() {
                self.advance();
                self.expect_token(
                    &Token::RBracket(self.current_location()),
                    "Expected ']' after array dimension",
                )?;
                array_dims.push(Some(text));
            } else {
                return Err(ParseError {
                    message: format!(
                        "Expected array dimension, found {}",
                        self.peek()
                    ),
                    location: self.current_location(),
                });
            }
        }

        Ok(TypeName {
            is_const,
            base,
            pointer_depth,
            array_dims,
        })
    }
}
