//! Lexer (tokenizer) for C expressions
//!
//! Converts the input text into a flat [`Token`] stream consumed by the
//! parser. Literal tokens keep their raw source text (including quotes and
//! escape sequences) so the generator can re-emit them verbatim.

use std::fmt;

/// Source position information for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// All token variants produced by the lexer.
///
/// Every variant carries a [`SourceLocation`] so that parse errors can report
/// an accurate line and column without a separate token→location table.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals (raw source text, quotes included for char/string)
    IntLiteral(String, SourceLocation),
    FloatLiteral(String, SourceLocation),
    CharLiteral(String, SourceLocation),
    StringLiteral(String, SourceLocation),

    // Identifiers
    Ident(String, SourceLocation),

    // Keywords (only those the expression grammar needs)
    Int(SourceLocation),
    Char(SourceLocation),
    Void(SourceLocation),
    Float(SourceLocation),
    Double(SourceLocation),
    Short(SourceLocation),
    Long(SourceLocation),
    Signed(SourceLocation),
    Unsigned(SourceLocation),
    Const(SourceLocation),
    Sizeof(SourceLocation),

    // Arithmetic
    Plus(SourceLocation),    // +
    Minus(SourceLocation),   // -
    Star(SourceLocation),    // *
    Slash(SourceLocation),   // /
    Percent(SourceLocation), // %

    // Comparison
    EqEq(SourceLocation),  // ==
    NotEq(SourceLocation), // !=
    Lt(SourceLocation),    // <
    Le(SourceLocation),    // <=
    Gt(SourceLocation),    // >
    Ge(SourceLocation),    // >=

    // Logical
    AndAnd(SourceLocation), // &&
    OrOr(SourceLocation),   // ||
    Bang(SourceLocation),   // !

    // Bitwise
    Amp(SourceLocation),   // &
    Pipe(SourceLocation),  // |
    Caret(SourceLocation), // ^
    Tilde(SourceLocation), // ~
    LtLt(SourceLocation),  // <<
    GtGt(SourceLocation),  // >>

    // Assignment
    Eq(SourceLocation),        // =
    PlusEq(SourceLocation),    // +=
    MinusEq(SourceLocation),   // -=
    StarEq(SourceLocation),    // *=
    SlashEq(SourceLocation),   // /=
    PercentEq(SourceLocation), // %=
    LtLtEq(SourceLocation),    // <<=
    GtGtEq(SourceLocation),    // >>=
    AmpEq(SourceLocation),     // &=
    CaretEq(SourceLocation),   // ^=
    PipeEq(SourceLocation),    // |=

    // Increment/Decrement
    PlusPlus(SourceLocation),   // ++
    MinusMinus(SourceLocation), // --

    // Member access
    Dot(SourceLocation),   // .
    Arrow(SourceLocation), // ->

    // Ternary
    Question(SourceLocation), // ?
    Colon(SourceLocation),    // :

    // Punctuation
    LParen(SourceLocation),    // (
    RParen(SourceLocation),    // )
    LBracket(SourceLocation),  // [
    RBracket(SourceLocation),  // ]
    Semicolon(SourceLocation), // ;
    Comma(SourceLocation),     // ,

    // End of input
    Eof(SourceLocation),
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::IntLiteral(_, loc)
            | Token::FloatLiteral(_, loc)
            | Token::CharLiteral(_, loc)
            | Token::StringLiteral(_, loc)
            | Token::Ident(_, loc)
            | Token::Int(loc)
            | Token::Char(loc)
            | Token::Void(loc)
            | Token::Float(loc)
            | Token::Double(loc)
            | Token::Short(loc)
            | Token::Long(loc)
            | Token::Signed(loc)
            | Token::Unsigned(loc)
            | Token::Const(loc)
            | Token::Sizeof(loc)
            | Token::Plus(loc)
            | Token::Minus(loc)
            | Token::Star(loc)
            | Token::Slash(loc)
            | Token::Percent(loc)
            | Token::EqEq(loc)
            | Token::NotEq(loc)
            | Token::Lt(loc)
            | Token::Le(loc)
            | Token::Gt(loc)
            | Token::Ge(loc)
            | Token::AndAnd(loc)
            | Token::OrOr(loc)
            | Token::Bang(loc)
            | Token::Amp(loc)
            | Token::Pipe(loc)
            | Token::Caret(loc)
            | Token::Tilde(loc)
            | Token::LtLt(loc)
            | Token::GtGt(loc)
            | Token::Eq(loc)
            | Token::PlusEq(loc)
            | Token::MinusEq(loc)
            | Token::StarEq(loc)
            | Token::SlashEq(loc)
            | Token::PercentEq(loc)
            | Token::LtLtEq(loc)
            | Token::GtGtEq(loc)
            | Token::AmpEq(loc)
            | Token::CaretEq(loc)
            | Token::PipeEq(loc)
            | Token::PlusPlus(loc)
            | Token::MinusMinus(loc)
            | Token::Dot(loc)
            | Token::Arrow(loc)
            | Token::Question(loc)
            | Token::Colon(loc)
            | Token::LParen(loc)
            | Token::RParen(loc)
            | Token::LBracket(loc)
            | Token::RBracket(loc)
            | Token::Semicolon(loc)
            | Token::Comma(loc)
            | Token::Eof(loc) => *loc,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::IntLiteral(s, _) => write!(f, "integer literal {}", s),
            Token::FloatLiteral(s, _) => write!(f, "floating literal {}", s),
            Token::CharLiteral(s, _) => write!(f, "character literal {}", s),
            Token::StringLiteral(s, _) => write!(f, "string literal {}", s),
            Token::Ident(s, _) => write!(f, "identifier '{}'", s),
            Token::Int(_) => write!(f, "'int'"),
            Token::Char(_) => write!(f, "'char'"),
            Token::Void(_) => write!(f, "'void'"),
            Token::Float(_) => write!(f, "'float'"),
            Token::Double(_) => write!(f, "'double'"),
            Token::Short(_) => write!(f, "'short'"),
            Token::Long(_) => write!(f, "'long'"),
            Token::Signed(_) => write!(f, "'signed'"),
            Token::Unsigned(_) => write!(f, "'unsigned'"),
            Token::Const(_) => write!(f, "'const'"),
            Token::Sizeof(_) => write!(f, "'sizeof'"),
            Token::Plus(_) => write!(f, "'+'"),
            Token::Minus(_) => write!(f, "'-'"),
            Token::Star(_) => write!(f, "'*'"),
            Token::Slash(_) => write!(f, "'/'"),
            Token::Percent(_) => write!(f, "'%'"),
            Token::EqEq(_) => write!(f, "'=='"),
            Token::NotEq(_) => write!(f, "'!='"),
            Token::Lt(_) => write!(f, "'<'"),
            Token::Le(_) => write!(f, "'<='"),
            Token::Gt(_) => write!(f, "'>'"),
            Token::Ge(_) => write!(f, "'>='"),
            Token::AndAnd(_) => write!(f, "'&&'"),
            Token::OrOr(_) => write!(f, "'||'"),
            Token::Bang(_) => write!(f, "'!'"),
            Token::Amp(_) => write!(f, "'&'"),
            Token::Pipe(_) => write!(f, "'|'"),
            Token::Caret(_) => write!(f, "'^'"),
            Token::Tilde(_) => write!(f, "'~'"),
            Token::LtLt(_) => write!(f, "'<<'"),
            Token::GtGt(_) => write!(f, "'>>'"),
            Token::Eq(_) => write!(f, "'='"),
            Token::PlusEq(_) => write!(f, "'+='"),
            Token::MinusEq(_) => write!(f, "'-='"),
            Token::StarEq(_) => write!(f, "'*='"),
            Token::SlashEq(_) => write!(f, "'/='"),
            Token::PercentEq(_) => write!(f, "'%='"),
            Token::LtLtEq(_) => write!(f, "'<<='"),
            Token::GtGtEq(_) => write!(f, "'>>='"),
            Token::AmpEq(_) => write!(f, "'&='"),
            Token::CaretEq(_) => write!(f, "'^='"),
            Token::PipeEq(_) => write!(f, "'|='"),
            Token::PlusPlus(_) => write!(f, "'++'"),
            Token::MinusMinus(_) => write!(f, "'--'"),
            Token::Dot(_) => write!(f, "'.'"),
            Token::Arrow(_) => write!(f, "'->'"),
            Token::Question(_) => write!(f, "'?'"),
            Token::Colon(_) => write!(f, "':'"),
            Token::LParen(_) => write!(f, "'('"),
            Token::RParen(_) => write!(f, "')'"),
            Token::LBracket(_) => write!(f, "'['"),
            Token::RBracket(_) => write!(f, "']'"),
            Token::Semicolon(_) => write!(f, "';'"),
            Token::Comma(_) => write!(f, "','"),
            Token::Eof(_) => write!(f, "end of input"),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexer error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for LexError {}

/// Lexer for C expression text
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments()?;

            if self.is_at_end() {
                tokens.push(Token::Eof(self.current_location()));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let ch = self.advance().ok_or_else(|| LexError {
            message: "Unexpected end of input".to_string(),
            location: loc,
        })?;

        match ch {
            // String literals
            '"' => self.string_literal(loc),

            // Character literals
            '\'' => self.char_literal(loc),

            // Numeric literals
            '0'..='9' => self.number_literal(ch, loc),

            // Identifiers and keywords
            'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(ch, loc),

            // Operators and punctuation
            '+' => {
                if self.peek() == Some('+') {
                    self.advance();
                    Ok(Token::PlusPlus(loc))
                } else if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::PlusEq(loc))
                } else {
                    Ok(Token::Plus(loc))
                }
            }
            '-' => {
                if self.peek() == Some('-') {
                    self.advance();
                    Ok(Token::MinusMinus(loc))
                } else if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::MinusEq(loc))
                } else if self.peek() == Some('>') {
                    self.advance();
                    Ok(Token::Arrow(loc))
                } else {
                    Ok(Token::Minus(loc))
                }
            }
            '*' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::StarEq(loc))
                } else {
                    Ok(Token::Star(loc))
                }
            }
            '/' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::SlashEq(loc))
                } else {
                    Ok(Token::Slash(loc))
                }
            }
            '%' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::PercentEq(loc))
                } else {
                    Ok(Token::Percent(loc))
                }
            }
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::EqEq(loc))
                } else {
                    Ok(Token::Eq(loc))
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::NotEq(loc))
                } else {
                    Ok(Token::Bang(loc))
                }
            }
            '<' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::Le(loc))
                } else if self.peek() == Some('<') {
                    self.advance();
                    if self.peek() == Some('=') {
                        self.advance();
                        Ok(Token::LtLtEq(loc))
                    } else {
                        Ok(Token::LtLt(loc))
                    }
                } else {
                    Ok(Token::Lt(loc))
                }
            }
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::Ge(loc))
                } else if self.peek() == Some('>') {
                    self.advance();
                    if self.peek() == Some('=') {
                        self.advance();
                        Ok(Token::GtGtEq(loc))
                    } else {
                        Ok(Token::GtGt(loc))
                    }
                } else {
                    Ok(Token::Gt(loc))
                }
            }
            '&' => {
                if self.peek() == Some('&') {
                    self.advance();
                    Ok(Token::AndAnd(loc))
                } else if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::AmpEq(loc))
                } else {
                    Ok(Token::Amp(loc))
                }
            }
            '|' => {
                if self.peek() == Some('|') {
                    self.advance();
                    Ok(Token::OrOr(loc))
                } else if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::PipeEq(loc))
                } else {
                    Ok(Token::Pipe(loc))
                }
            }
            '^' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::CaretEq(loc))
                } else {
                    Ok(Token::Caret(loc))
                }
            }
            '~' => Ok(Token::Tilde(loc)),
            '.' => {
                // A dot followed by a digit starts a floating literal (.5)
                if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.fraction_literal(String::from("."), loc)
                } else {
                    Ok(Token::Dot(loc))
                }
            }
            '?' => Ok(Token::Question(loc)),
            ':' => Ok(Token::Colon(loc)),
            '(' => Ok(Token::LParen(loc)),
            ')' => Ok(Token::RParen(loc)),
            '[' => Ok(Token::LBracket(loc)),
            ']' => Ok(Token::RBracket(loc)),
            ';' => Ok(Token::Semicolon(loc)),
            ',' => Ok(Token::Comma(loc)),

            _ => Err(LexError {
                message: format!("Unexpected character: '{}'", ch),
                location: loc,
            }),
        }
    }

    /// Scan a string literal, keeping the raw lexeme (quotes included)
    fn string_literal(&mut self, loc: SourceLocation) -> Result<Token, LexError> {
        let mut raw = String::from("\"");

        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();

            if ch == '"' {
                raw.push('"');
                return Ok(Token::StringLiteral(raw, loc));
            }

            raw.push(ch);
            if ch == '\\' {
                let escaped = self.advance().ok_or_else(|| LexError {
                    message: "Unterminated string literal".to_string(),
                    location: loc,
                })?;
                self.check_escape(escaped)?;
                raw.push(escaped);
            }
        }

        Err(LexError {
            message: "Unterminated string literal".to_string(),
            location: loc,
        })
    }

    /// Scan a character literal, keeping the raw lexeme (quotes included)
    fn char_literal(&mut self, loc: SourceLocation) -> Result<Token, LexError> {
        let mut raw = String::from("'");

        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();

            if ch == '\'' {
                raw.push('\'');
                if raw.len() < 3 {
                    return Err(LexError {
                        message: "Empty character literal".to_string(),
                        location: loc,
                    });
                }
                return Ok(Token::CharLiteral(raw, loc));
            }

            raw.push(ch);
            if ch == '\\' {
                let escaped = self.advance().ok_or_else(|| LexError {
                    message: "Unterminated character literal".to_string(),
                    location: loc,
                })?;
                self.check_escape(escaped)?;
                raw.push(escaped);
            }
        }

        Err(LexError {
            message: "Unterminated character literal".to_string(),
            location: loc,
        })
    }

    /// Validate the character following a backslash in a char/string literal
    fn check_escape(&self, escaped: char) -> Result<(), LexError> {
        match escaped {
            'n' | 't' | 'r' | 'v' | 'f' | 'a' | 'b' | '\\' | '\'' | '"' | '?' | 'x'
            | '0'..='7' => Ok(()),
            _ => Err(LexError {
                message: format!("Unknown escape sequence: \\{}", escaped),
                location: self.current_location(),
            }),
        }
    }

    /// Scan a numeric literal starting with a digit, keeping the raw text.
    ///
    /// Handles decimal/hex/octal integers with `u`/`l` suffix runs, and
    /// floating literals with fraction, exponent, and `f`/`l` suffixes.
    fn number_literal(&mut self, first_digit: char, loc: SourceLocation) -> Result<Token, LexError> {
        let mut text = String::new();
        text.push(first_digit);

        // Hex: 0x... is always an integer here
        if first_digit == '0' && matches!(self.peek(), Some('x') | Some('X')) {
            text.push(self.advance().unwrap_or('x'));
            let mut digits = 0;
            while let Some(ch) = self.peek() {
                if ch.is_ascii_hexdigit() {
                    text.push(ch);
                    self.advance();
                    digits += 1;
                } else {
                    break;
                }
            }
            if digits == 0 {
                return Err(LexError {
                    message: format!("Invalid integer literal: {}", text),
                    location: loc,
                });
            }
            self.int_suffix(&mut text);
            return Ok(Token::IntLiteral(text, loc));
        }

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match self.peek() {
            Some('.') => {
                text.push('.');
                self.advance();
                self.fraction_literal(text, loc)
            }
            Some('e') | Some('E') => {
                self.exponent(&mut text, loc)?;
                self.float_suffix(&mut text);
                Ok(Token::FloatLiteral(text, loc))
            }
            Some('f') | Some('F') => {
                text.push(self.advance().unwrap_or('f'));
                Ok(Token::FloatLiteral(text, loc))
            }
            _ => {
                self.int_suffix(&mut text);
                Ok(Token::IntLiteral(text, loc))
            }
        }
    }

    /// Continue a floating literal after its decimal point
    fn fraction_literal(&mut self, mut text: String, loc: SourceLocation) -> Result<Token, LexError> {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if matches!(self.peek(), Some('e') | Some('E')) {
            self.exponent(&mut text, loc)?;
        }
        self.float_suffix(&mut text);

        Ok(Token::FloatLiteral(text, loc))
    }

    /// Scan an exponent part: e[+-]?digits
    fn exponent(&mut self, text: &mut String, loc: SourceLocation) -> Result<(), LexError> {
        text.push(self.advance().unwrap_or('e'));
        if matches!(self.peek(), Some('+') | Some('-')) {
            text.push(self.advance().unwrap_or('+'));
        }

        let mut digits = 0;
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
                digits += 1;
            } else {
                break;
            }
        }

        if digits == 0 {
            return Err(LexError {
                message: format!("Malformed floating literal: {}", text),
                location: loc,
            });
        }
        Ok(())
    }

    fn int_suffix(&mut self, text: &mut String) {
        while let Some(ch) = self.peek() {
            if matches!(ch, 'u' | 'U' | 'l' | 'L') {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
    }

    fn float_suffix(&mut self, text: &mut String) {
        if let Some(ch) = self.peek() {
            if matches!(ch, 'f' | 'F' | 'l' | 'L') {
                text.push(ch);
                self.advance();
            }
        }
    }

    /// Scan an identifier or keyword
    fn identifier_or_keyword(
        &mut self,
        first_char: char,
        loc: SourceLocation,
    ) -> Result<Token, LexError> {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let token = match ident.as_str() {
            "int" => Token::Int(loc),
            "char" => Token::Char(loc),
            "void" => Token::Void(loc),
            "float" => Token::Float(loc),
            "double" => Token::Double(loc),
            "short" => Token::Short(loc),
            "long" => Token::Long(loc),
            "signed" => Token::Signed(loc),
            "unsigned" => Token::Unsigned(loc),
            "const" => Token::Const(loc),
            "sizeof" => Token::Sizeof(loc),
            _ => Token::Ident(ident, loc),
        };

        Ok(token)
    }

    /// Skip whitespace and comments
    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek() {
                Some(' ') | Some('\t') | Some('\r') | Some('\n') => {
                    self.advance();
                }
                Some('/') => {
                    if self.peek_ahead(1) == Some('/') {
                        self.skip_line_comment();
                    } else if self.peek_ahead(1) == Some('*') {
                        self.skip_block_comment()?;
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// Skip single-line comment (// ...)
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            self.advance();
            if ch == '\n' {
                break;
            }
        }
    }

    /// Skip multi-line comment (/* ... */)
    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let start_loc = self.current_location();
        self.advance(); // skip '/'
        self.advance(); // skip '*'

        while !self.is_at_end() {
            if self.peek() == Some('*') && self.peek_ahead(1) == Some('/') {
                self.advance(); // skip '*'
                self.advance(); // skip '/'
                return Ok(());
            }
            self.advance();
        }

        Err(LexError {
            message: "Unterminated block comment".to_string(),
            location: start_loc,
        })
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        if self.position < self.input.len() {
            Some(self.input[self.position])
        } else {
            None
        }
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        let pos = self.position + n;
        if pos < self.input.len() {
            Some(self.input[pos])
        } else {
            None
        }
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        if self.position >= self.input.len() {
            return None;
        }

        let ch = self.input[self.position];
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokens() {
        let mut lexer = Lexer::new("a + b * c");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Ident(ref s, _) if s == "a"));
        assert!(matches!(tokens[1], Token::Plus(_)));
        assert!(matches!(tokens[2], Token::Ident(ref s, _) if s == "b"));
        assert!(matches!(tokens[3], Token::Star(_)));
        assert!(matches!(tokens[4], Token::Ident(ref s, _) if s == "c"));
        assert!(matches!(tokens[5], Token::Eof(_)));
    }

    #[test]
    fn test_operators() {
        let mut lexer = Lexer::new("++ -- += -= == != && || <<= >>= &= ^= |=");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::PlusPlus(_)));
        assert!(matches!(tokens[1], Token::MinusMinus(_)));
        assert!(matches!(tokens[2], Token::PlusEq(_)));
        assert!(matches!(tokens[3], Token::MinusEq(_)));
        assert!(matches!(tokens[4], Token::EqEq(_)));
        assert!(matches!(tokens[5], Token::NotEq(_)));
        assert!(matches!(tokens[6], Token::AndAnd(_)));
        assert!(matches!(tokens[7], Token::OrOr(_)));
        assert!(matches!(tokens[8], Token::LtLtEq(_)));
        assert!(matches!(tokens[9], Token::GtGtEq(_)));
        assert!(matches!(tokens[10], Token::AmpEq(_)));
        assert!(matches!(tokens[11], Token::CaretEq(_)));
        assert!(matches!(tokens[12], Token::PipeEq(_)));
    }

    #[test]
    fn test_shift_vs_shift_assign() {
        let mut lexer = Lexer::new("a << b >> c");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[1], Token::LtLt(_)));
        assert!(matches!(tokens[3], Token::GtGt(_)));
    }

    #[test]
    fn test_integer_literals_keep_raw_text() {
        let mut lexer = Lexer::new("42 0x1F 017 123u 5UL");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::IntLiteral(ref s, _) if s == "42"));
        assert!(matches!(tokens[1], Token::IntLiteral(ref s, _) if s == "0x1F"));
        assert!(matches!(tokens[2], Token::IntLiteral(ref s, _) if s == "017"));
        assert!(matches!(tokens[3], Token::IntLiteral(ref s, _) if s == "123u"));
        assert!(matches!(tokens[4], Token::IntLiteral(ref s, _) if s == "5UL"));
    }

    #[test]
    fn test_float_literals() {
        let mut lexer = Lexer::new("1.5 2e10 3.14f .5 1e-3");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::FloatLiteral(ref s, _) if s == "1.5"));
        assert!(matches!(tokens[1], Token::FloatLiteral(ref s, _) if s == "2e10"));
        assert!(matches!(tokens[2], Token::FloatLiteral(ref s, _) if s == "3.14f"));
        assert!(matches!(tokens[3], Token::FloatLiteral(ref s, _) if s == ".5"));
        assert!(matches!(tokens[4], Token::FloatLiteral(ref s, _) if s == "1e-3"));
    }

    #[test]
    fn test_string_literal_raw_lexeme() {
        let mut lexer = Lexer::new(r#""hello\nworld""#);
        let tokens = lexer.tokenize().unwrap();

        match &tokens[0] {
            Token::StringLiteral(s, _) => assert_eq!(s, r#""hello\nworld""#),
            other => panic!("Expected string literal, got {:?}", other),
        }
    }

    #[test]
    fn test_char_literal_raw_lexeme() {
        let mut lexer = Lexer::new(r"'\n'");
        let tokens = lexer.tokenize().unwrap();

        match &tokens[0] {
            Token::CharLiteral(s, _) => assert_eq!(s, r"'\n'"),
            other => panic!("Expected char literal, got {:?}", other),
        }
    }

    #[test]
    fn test_unterminated_string() {
        let mut lexer = Lexer::new("\"abc");
        let err = lexer.tokenize().unwrap_err();
        assert!(err.message.contains("Unterminated string"));
    }

    #[test]
    fn test_unterminated_char() {
        let mut lexer = Lexer::new("'a");
        let err = lexer.tokenize().unwrap_err();
        assert!(err.message.contains("Unterminated character"));
    }

    #[test]
    fn test_illegal_character() {
        let mut lexer = Lexer::new("a @ b");
        let err = lexer.tokenize().unwrap_err();
        assert!(err.message.contains("Unexpected character"));
        assert_eq!(err.location.column, 3);
    }

    #[test]
    fn test_comments_skipped() {
        let mut lexer = Lexer::new("a // comment\n+ /* block\ncomment */ b");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Ident(ref s, _) if s == "a"));
        assert!(matches!(tokens[1], Token::Plus(_)));
        assert!(matches!(tokens[2], Token::Ident(ref s, _) if s == "b"));
        assert!(matches!(tokens[3], Token::Eof(_)));
    }

    #[test]
    fn test_keywords() {
        let mut lexer = Lexer::new("sizeof unsigned long size_t");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Sizeof(_)));
        assert!(matches!(tokens[1], Token::Unsigned(_)));
        assert!(matches!(tokens[2], Token::Long(_)));
        assert!(matches!(tokens[3], Token::Ident(ref s, _) if s == "size_t"));
    }
}
