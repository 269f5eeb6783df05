use std::fmt;

use crate::{
    ast::{Comparator, Expr, Query, QueryOption, Token},
    lexer::{LexError, Lexer, Position},
};

/// Errors that can occur while parsing a token stream into a query.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The lexer failed to produce a token
    Lex(LexError),

    /// The token stream does not match the grammar
    UnexpectedToken {
        expected: String,
        found: Token,
        position: Position,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(e) => write!(f, "{}", e),
            ParseError::UnexpectedToken {
                expected,
                found,
                position,
            } => write!(f, "Expected {}, got {:?} at {}", expected, found, position),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(e) => Some(e),
            ParseError::UnexpectedToken { .. } => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError::Lex(e)
    }
}

/// Recursive-descent parser over the lexer's token stream.
///
/// One token of lookahead (`current_token`) is all the grammar needs.
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    current_position: Position,
}

impl Parser {
    /// Creates a parser, reading the first token eagerly.
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        let current_position = lexer.position();
        Ok(Parser {
            lexer,
            current_token,
            current_position,
        })
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_token = self.lexer.next_token()?;
        self.current_position = self.lexer.position();
        Ok(())
    }

    fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(&self.current_token) == std::mem::discriminant(token)
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if !self.check(&expected) {
            return Err(self.unexpected(format!("{:?}", expected)));
        }
        self.advance()
    }

    fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        ParseError::UnexpectedToken {
            expected: expected.into(),
            found: self.current_token.clone(),
            position: self.current_position,
        }
    }

    fn parse_identifier(&mut self, expected: &str) -> Result<String, ParseError> {
        match &self.current_token {
            Token::Identifier(name) => {
                let name = name.clone();
                self.advance()?;
                Ok(name)
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    fn parse_comparator(&mut self) -> Result<Comparator, ParseError> {
        let comparator = match &self.current_token {
            Token::Eq => Comparator::Eq,
            Token::NotEq => Comparator::NotEq,
            Token::Lt => Comparator::Lt,
            Token::Gt => Comparator::Gt,
            Token::LtEq => Comparator::LtEq,
            Token::GtEq => Comparator::GtEq,
            _ => return Err(self.unexpected("comparator")),
        };
        self.advance()?;
        Ok(comparator)
    }

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let expr = match &self.current_token {
            Token::String(literal) => Expr::String(literal.clone()),
            Token::Integer(literal) => Expr::Integer(literal.clone()),
            // A bare word lands in the integer slot; whether its text is
            // numeric is the evaluator's decision, not the grammar's.
            Token::Identifier(literal) => Expr::Integer(literal.clone()),
            _ => return Err(self.unexpected("string or integer literal")),
        };
        self.advance()?;
        Ok(expr)
    }

    /// Parse a complete query.
    ///
    /// Grammar:
    ///
    /// ```text
    /// query      = collection [ where-clause ] [ orderby-clause ] [ limit-clause ]
    /// collection = identifier
    /// where-clause   = "WHERE" identifier comparator expr
    /// orderby-clause = "ORDER" "BY" identifier [ "DESC" ]
    /// limit-clause   = "LIMIT" expr
    /// ```
    ///
    /// Clauses must appear in that relative order and at most once each; a
    /// misordered or duplicated clause surfaces as unexpected trailing
    /// input.
    pub fn parse_query(&mut self) -> Result<Query, ParseError> {
        let collection = self.parse_identifier("collection name")?;
        let mut options = vec![];

        if self.check(&Token::Where) {
            self.advance()?;
            let field = self.parse_identifier("field name")?;
            let comparator = self.parse_comparator()?;
            let value = self.parse_expr()?;
            options.push(QueryOption::Where {
                field,
                comparator,
                value,
            });
        }

        if self.check(&Token::Order) {
            self.advance()?;
            self.expect(Token::By)?;
            let field = self.parse_identifier("field name")?;
            let mut descending = false;
            if self.check(&Token::Desc) {
                self.advance()?;
                descending = true;
            }
            options.push(QueryOption::OrderBy { field, descending });
        }

        if self.check(&Token::Limit) {
            self.advance()?;
            let value = self.parse_expr()?;
            options.push(QueryOption::Limit { value });
        }

        if !self.check(&Token::Eof) {
            return Err(self.unexpected("end of input"));
        }

        Ok(Query {
            collection,
            options,
        })
    }
}
