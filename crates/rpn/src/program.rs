//! Owned RPN programs

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::{evaluate_with, EvalContext, Token};

/// An ordered token sequence submitted as one unit.
///
/// Evaluation borrows the program and never mutates it, so the same program
/// can be evaluated any number of times. Serializes as a plain array of
/// tokens, e.g. `[{"operand":2},{"operand":3},{"operator":"sub"}]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program {
    tokens: Vec<Token>,
}

impl Program {
    /// Create a program from tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// The tokens, in evaluation order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the program has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Evaluate with the default context.
    pub fn evaluate(&self) -> Result<i64> {
        self.evaluate_with(&EvalContext::default())
    }

    /// Evaluate with the given context.
    pub fn evaluate_with(&self, ctx: &EvalContext) -> Result<i64> {
        evaluate_with(&self.tokens, ctx)
    }
}

impl From<Vec<Token>> for Program {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

impl FromIterator<Token> for Program {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl AsRef<[Token]> for Program {
    fn as_ref(&self) -> &[Token] {
        &self.tokens
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
