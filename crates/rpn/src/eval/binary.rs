//! Binary operator application
//!
//! All arithmetic is on `i64` and checked. Division and remainder truncate
//! toward zero, so `-7 / 2 == -3` and `-7 % 2 == -1`: the remainder takes
//! the sign of the left operand.

use crate::error::{EvalError, Result};
use crate::token::Operator;

impl Operator {
    /// Compute `lhs op rhs`, where `lhs` was pushed before `rhs`.
    ///
    /// `position` is the index of the operator token and is only used for
    /// error reporting.
    pub fn apply(self, lhs: i64, rhs: i64, position: usize) -> Result<i64> {
        match self {
            Operator::Add => eval_add(lhs, rhs, position),
            Operator::Sub => eval_sub(lhs, rhs, position),
            Operator::Mul => eval_mul(lhs, rhs, position),
            Operator::Div => eval_div(lhs, rhs, position),
            Operator::Mod => eval_rem(lhs, rhs, position),
        }
    }
}

fn overflow(op: Operator, lhs: i64, rhs: i64, position: usize) -> EvalError {
    EvalError::IntegerOverflow {
        op,
        lhs,
        rhs,
        position,
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Arithmetic Operations
// ═══════════════════════════════════════════════════════════════════════

fn eval_add(lhs: i64, rhs: i64, position: usize) -> Result<i64> {
    lhs.checked_add(rhs)
        .ok_or_else(|| overflow(Operator::Add, lhs, rhs, position))
}

fn eval_sub(lhs: i64, rhs: i64, position: usize) -> Result<i64> {
    lhs.checked_sub(rhs)
        .ok_or_else(|| overflow(Operator::Sub, lhs, rhs, position))
}

fn eval_mul(lhs: i64, rhs: i64, position: usize) -> Result<i64> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| overflow(Operator::Mul, lhs, rhs, position))
}

fn eval_div(lhs: i64, rhs: i64, position: usize) -> Result<i64> {
    if rhs == 0 {
        return Err(EvalError::DivisionByZero {
            op: Operator::Div,
            position,
        });
    }

    // Only i64::MIN / -1 can fail here
    lhs.checked_div(rhs)
        .ok_or_else(|| overflow(Operator::Div, lhs, rhs, position))
}

fn eval_rem(lhs: i64, rhs: i64, position: usize) -> Result<i64> {
    if rhs == 0 {
        return Err(EvalError::DivisionByZero {
            op: Operator::Mod,
            position,
        });
    }

    // i64::MIN % -1 is mathematically 0, which is what wrapping_rem yields
    Ok(lhs.wrapping_rem(rhs))
}
