//! Error types for RPN evaluation

use thiserror::Error;

use crate::token::Operator;

/// Errors that can occur while evaluating a token sequence.
///
/// Every variant records the zero-based position of the token at which the
/// failure was detected. `MalformedExpression` is detected after the last
/// token, so its position equals the length of the program.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// An operator was reached with fewer than two values on the stack.
    #[error("insufficient operands for '{op}' at token {position}: stack holds {available}")]
    InsufficientOperands {
        /// The operator that could not be applied
        op: Operator,
        /// Number of values that were on the stack
        available: usize,
        /// Token position
        position: usize,
    },

    /// The right operand of `/` or `%` was zero.
    #[error("division by zero in '{op}' at token {position}")]
    DivisionByZero {
        /// Either `Div` or `Mod`
        op: Operator,
        /// Token position
        position: usize,
    },

    /// The result of an operation does not fit in an `i64`.
    #[error("integer overflow in {lhs} {op} {rhs} at token {position}")]
    IntegerOverflow {
        /// The operator being applied
        op: Operator,
        /// Left operand
        lhs: i64,
        /// Right operand
        rhs: i64,
        /// Token position
        position: usize,
    },

    /// The stack did not hold exactly one value once all tokens were consumed.
    #[error("malformed expression: {depth} values left on the stack, expected exactly 1")]
    MalformedExpression {
        /// Final stack depth
        depth: usize,
        /// Always the program length
        position: usize,
    },
}

impl EvalError {
    /// Get the token position associated with this error.
    pub fn position(&self) -> usize {
        match self {
            EvalError::InsufficientOperands { position, .. }
            | EvalError::DivisionByZero { position, .. }
            | EvalError::IntegerOverflow { position, .. }
            | EvalError::MalformedExpression { position, .. } => *position,
        }
    }

    /// Stable snake_case name of the error kind, for structured output.
    pub fn kind(&self) -> &'static str {
        match self {
            EvalError::InsufficientOperands { .. } => "insufficient_operands",
            EvalError::DivisionByZero { .. } => "division_by_zero",
            EvalError::IntegerOverflow { .. } => "integer_overflow",
            EvalError::MalformedExpression { .. } => "malformed_expression",
        }
    }
}

/// Error produced when a single word cannot be read as a token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The word is empty or only whitespace
    #[error("empty token")]
    Empty,

    /// The word is neither an integer nor an operator
    #[error("unrecognized token '{0}': expected an integer or one of + - * / %")]
    Unrecognized(String),

    /// The word looks like an integer but does not fit in an `i64`
    #[error("integer literal '{0}' is out of range for i64")]
    OutOfRange(String),
}

/// Result type alias for evaluation
pub type Result<T> = std::result::Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_are_distinct() {
        let errors = [
            EvalError::InsufficientOperands {
                op: Operator::Add,
                available: 0,
                position: 0,
            },
            EvalError::DivisionByZero {
                op: Operator::Div,
                position: 2,
            },
            EvalError::IntegerOverflow {
                op: Operator::Mul,
                lhs: i64::MAX,
                rhs: 2,
                position: 2,
            },
            EvalError::MalformedExpression {
                depth: 2,
                position: 2,
            },
        ];
        let mut kinds: Vec<_> = errors.iter().map(EvalError::kind).collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), errors.len());
    }
}
