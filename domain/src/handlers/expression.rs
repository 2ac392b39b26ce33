//! Sandboxed arithmetic evaluator.
//!
//! Grammar (recursive descent, left-associative):
//!
//! ```text
//! expr   := term   (('+' | '-') term)*
//! term   := unary  (('*' | '/') unary)*
//! unary  := ('+' | '-') unary | atom
//! atom   := number | '(' expr ')'
//! number := digits ['.' digits] | '.' digits
//! ```
//!
//! There are no identifiers and no calls, so nothing but arithmetic can
//! ever be evaluated.

use thiserror::Error;

/// Maximum parenthesis nesting accepted before giving up
const MAX_DEPTH: usize = 64;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Empty expression")]
    Empty,

    #[error("Unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result is not a finite number")]
    NonFinite,

    #[error("Expression nested too deeply")]
    TooDeep,
}

/// Evaluate an arithmetic expression.
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    let chars: Vec<char> = input.chars().collect();
    let mut parser = Parser { chars, pos: 0 };

    parser.skip_whitespace();
    if parser.peek().is_none() {
        return Err(EvalError::Empty);
    }

    let value = parser.expr(0)?;
    parser.skip_whitespace();
    if let Some(ch) = parser.peek() {
        return Err(EvalError::UnexpectedChar {
            ch,
            pos: parser.pos,
        });
    }

    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite)
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Consume `ch` (after whitespace) if it is next
    fn eat(&mut self, ch: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(ch) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expr(&mut self, depth: usize) -> Result<f64, EvalError> {
        let mut value = self.term(depth)?;
        loop {
            if self.eat('+') {
                value += self.term(depth)?;
            } else if self.eat('-') {
                value -= self.term(depth)?;
            } else {
                return Ok(value);
            }
        }
    }

    fn term(&mut self, depth: usize) -> Result<f64, EvalError> {
        let mut value = self.unary(depth)?;
        loop {
            if self.eat('*') {
                value *= self.unary(depth)?;
            } else if self.eat('/') {
                let divisor = self.unary(depth)?;
                if divisor == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                value /= divisor;
            } else {
                return Ok(value);
            }
        }
    }

    fn unary(&mut self, depth: usize) -> Result<f64, EvalError> {
        let mut negate = false;
        loop {
            if self.eat('-') {
                negate = !negate;
            } else if !self.eat('+') {
                break;
            }
        }
        let value = self.atom(depth)?;
        Ok(if negate { -value } else { value })
    }

    fn atom(&mut self, depth: usize) -> Result<f64, EvalError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(EvalError::UnexpectedEnd),
            Some('(') => {
                if depth >= MAX_DEPTH {
                    return Err(EvalError::TooDeep);
                }
                self.pos += 1;
                let value = self.expr(depth + 1)?;
                if self.eat(')') {
                    Ok(value)
                } else {
                    match self.peek() {
                        Some(ch) => Err(EvalError::UnexpectedChar { ch, pos: self.pos }),
                        None => Err(EvalError::UnexpectedEnd),
                    }
                }
            }
            Some(ch) if ch.is_ascii_digit() || ch == '.' => self.number(),
            Some(ch) => Err(EvalError::UnexpectedChar { ch, pos: self.pos }),
        }
    }

    fn number(&mut self) -> Result<f64, EvalError> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || c == '.')
        {
            self.pos += 1;
        }
        let literal: String = self.chars[start..self.pos].iter().collect();
        literal
            .parse::<f64>()
            .map_err(|_| EvalError::InvalidNumber(literal))
    }
}
