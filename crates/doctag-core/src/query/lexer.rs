//! Query tokenizer
//!
//! Splits a query string on whitespace and parentheses. A bare word equal
//! (case-insensitively) to `and`, `or` or `not` is always an operator
//! token, never a tag literal.

/// A single query token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A tag literal
    Tag(String),
    And,
    Or,
    Not,
    LParen,
    RParen,
}

impl Token {
    /// Render the token the way the user wrote it, for error messages
    pub fn display(&self) -> &str {
        match self {
            Token::Tag(t) => t,
            Token::And => "and",
            Token::Or => "or",
            Token::Not => "not",
            Token::LParen => "(",
            Token::RParen => ")",
        }
    }
}

/// A token plus its byte offset in the query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub offset: usize,
}

/// Tokenize a query string
///
/// Never fails: every non-whitespace character lands in some token, and
/// syntax problems are left for the parser to report with positions.
pub fn tokenize(input: &str) -> Vec<Spanned> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    fn flush(tokens: &mut Vec<Spanned>, start: usize, end: usize, input: &str) {
        let word = &input[start..end];
        let token = if word.eq_ignore_ascii_case("and") {
            Token::And
        } else if word.eq_ignore_ascii_case("or") {
            Token::Or
        } else if word.eq_ignore_ascii_case("not") {
            Token::Not
        } else {
            Token::Tag(word.to_string())
        };
        tokens.push(Spanned {
            token,
            offset: start,
        });
    }

    for (i, ch) in input.char_indices() {
        match ch {
            '(' | ')' => {
                if let Some(start) = word_start.take() {
                    flush(&mut tokens, start, i, input);
                }
                let token = if ch == '(' { Token::LParen } else { Token::RParen };
                tokens.push(Spanned { token, offset: i });
            }
            c if c.is_whitespace() => {
                if let Some(start) = word_start.take() {
                    flush(&mut tokens, start, i, input);
                }
            }
            _ => {
                word_start.get_or_insert(i);
            }
        }
    }
    if let Some(start) = word_start {
        flush(&mut tokens, start, input.len(), input);
    }

    tokens
}
