//! Tokens of an RPN program

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// One of the five binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero
    Div,
    /// `%`, remainder of truncating division
    Mod,
}

impl Operator {
    /// All operators, in declaration order.
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Mod,
    ];

    /// The symbol used to write this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
        }
    }

    /// The lowercase word form accepted alongside the symbol.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Sub => "sub",
            Operator::Mul => "mul",
            Operator::Div => "div",
            Operator::Mod => "mod",
        }
    }

    /// Look up an operator by symbol or (case-insensitive) name.
    pub fn from_word(word: &str) -> Option<Operator> {
        Self::ALL
            .into_iter()
            .find(|op| word == op.symbol() || word.eq_ignore_ascii_case(op.name()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim();
        if word.is_empty() {
            return Err(TokenError::Empty);
        }
        Operator::from_word(word).ok_or_else(|| TokenError::Unrecognized(word.to_string()))
    }
}

/// A single element of an RPN program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Token {
    /// An integer pushed onto the stack
    Operand(i64),
    /// An operator applied to the top two values
    Operator(Operator),
}

impl Token {
    /// Create an operand token.
    pub fn operand(value: i64) -> Self {
        Token::Operand(value)
    }

    /// Check if this token is an operator.
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }
}

impl From<i64> for Token {
    fn from(value: i64) -> Self {
        Token::Operand(value)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Operator(op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand(value) => write!(f, "{}", value),
            Token::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// Reads exactly one word. Operators take precedence, so `-` is `Sub` while
/// `-7` is the operand negative seven.
impl FromStr for Token {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim();
        if word.is_empty() {
            return Err(TokenError::Empty);
        }
        if let Some(op) = Operator::from_word(word) {
            return Ok(Token::Operator(op));
        }
        match word.parse::<i64>() {
            Ok(value) => Ok(Token::Operand(value)),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(TokenError::OutOfRange(word.to_string()))
                }
                _ => Err(TokenError::Unrecognized(word.to_string())),
            },
        }
    }
}
