//! Recursive-descent parser for boolean tag queries
//!
//! One function per grammar rule; `or` and `and` chains fold left so
//! `a or b or c` becomes `Or(Or(a, b), c)`.

use super::error::QueryError;
use super::expr::Expr;
use super::lexer::{tokenize, Spanned, Token};

/// Parse a query string into an expression tree
pub fn parse(input: &str) -> Result<Expr, QueryError> {
    let tokens = tokenize(input);
    if tokens.is_empty() {
        return Err(QueryError::Empty);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.or_expr()?;

    // Anything left over is a syntax error, e.g. two adjacent tag
    // literals with no operator between them.
    if let Some(spanned) = parser.peek() {
        return Err(QueryError::UnexpectedToken {
            token: spanned.token.display().to_string(),
            offset: spanned.offset,
        });
    }

    Ok(expr)
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Spanned> {
        let spanned = self.tokens.get(self.pos).cloned();
        if spanned.is_some() {
            self.pos += 1;
        }
        spanned
    }

    /// orExpr := andExpr (OR andExpr)*
    fn or_expr(&mut self) -> Result<Expr, QueryError> {
        let mut expr = self.and_expr()?;
        while matches!(self.peek(), Some(s) if s.token == Token::Or) {
            self.advance();
            let rhs = self.and_expr()?;
            expr = Expr::Or(Box::new(expr), Box::new(rhs));
        }
        Ok(expr)
    }

    /// andExpr := notExpr (AND notExpr)*
    fn and_expr(&mut self) -> Result<Expr, QueryError> {
        let mut expr = self.not_expr()?;
        while matches!(self.peek(), Some(s) if s.token == Token::And) {
            self.advance();
            let rhs = self.not_expr()?;
            expr = Expr::And(Box::new(expr), Box::new(rhs));
        }
        Ok(expr)
    }

    /// notExpr := NOT notExpr | atom
    fn not_expr(&mut self) -> Result<Expr, QueryError> {
        if matches!(self.peek(), Some(s) if s.token == Token::Not) {
            self.advance();
            let operand = self.not_expr()?;
            return Ok(Expr::Not(Box::new(operand)));
        }
        self.atom()
    }

    /// atom := TAG | '(' expr ')'
    fn atom(&mut self) -> Result<Expr, QueryError> {
        let Some(spanned) = self.advance() else {
            return Err(QueryError::UnexpectedEnd {
                expected: "a tag or '('",
            });
        };

        match spanned.token {
            Token::Tag(tag) => Ok(Expr::Tag(tag)),
            Token::LParen => {
                let open_offset = spanned.offset;
                let expr = self.or_expr()?;
                match self.advance() {
                    Some(s) if s.token == Token::RParen => Ok(expr),
                    Some(s) => Err(QueryError::UnexpectedToken {
                        token: s.token.display().to_string(),
                        offset: s.offset,
                    }),
                    None => Err(QueryError::UnmatchedParen {
                        offset: open_offset,
                    }),
                }
            }
            other => Err(QueryError::UnexpectedToken {
                token: other.display().to_string(),
                offset: spanned.offset,
            }),
        }
    }
}
