//! The evaluation stack

use std::fmt;

use crate::error::{EvalError, Result};
use crate::token::Operator;

/// A stack of `i64` values with the top at the end.
///
/// One stack belongs to one evaluation run. It is created empty and consumed
/// by [`Stack::into_result`] once the last token has been processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    values: Vec<i64>,
}

impl Stack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stack with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Push a value onto the top.
    pub fn push(&mut self, value: i64) {
        self.values.push(value);
    }

    /// Pop the two topmost values as `(lhs, rhs)`, where `rhs` was on top.
    ///
    /// Leaves the stack untouched when fewer than two values are present.
    pub fn pop_operands(&mut self, op: Operator, position: usize) -> Result<(i64, i64)> {
        let depth = self.values.len();
        if depth < 2 {
            return Err(EvalError::InsufficientOperands {
                op,
                available: depth,
                position,
            });
        }
        let operands = (self.values[depth - 2], self.values[depth - 1]);
        self.values.truncate(depth - 2);
        Ok(operands)
    }

    /// The value on top, if any.
    pub fn peek(&self) -> Option<i64> {
        self.values.last().copied()
    }

    /// Number of values on the stack.
    pub fn depth(&self) -> usize {
        self.values.len()
    }

    /// Check if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values from bottom to top.
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// Consume the stack, yielding its sole value.
    ///
    /// Any depth other than one is a `MalformedExpression` reported at
    /// `position`.
    pub fn into_result(self, position: usize) -> Result<i64> {
        match *self.values.as_slice() {
            [value] => Ok(value),
            _ => Err(EvalError::MalformedExpression {
                depth: self.values.len(),
                position,
            }),
        }
    }
}

/// Space-separated values, bottom first.
impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
