//! Stack-based evaluation of RPN programs

pub mod binary;

use log::debug;

use crate::error::Result;
use crate::{EvalContext, Stack, Token};

/// Trait for applying a program element to the evaluation stack.
///
/// Each token kind implements this trait; the driver in [`evaluate_with`]
/// feeds tokens to it in order.
pub trait Evaluate {
    /// Apply this element to `stack`. `position` is the element's index in
    /// the program and is used for error reporting.
    fn eval(&self, stack: &mut Stack, position: usize) -> Result<()>;
}

impl Evaluate for Token {
    fn eval(&self, stack: &mut Stack, position: usize) -> Result<()> {
        match *self {
            Token::Operand(value) => {
                stack.push(value);
                Ok(())
            }
            Token::Operator(op) => {
                let (lhs, rhs) = stack.pop_operands(op, position)?;
                let value = op.apply(lhs, rhs, position)?;
                stack.push(value);
                Ok(())
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Entry Points
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate a token sequence with the default context.
///
/// ```
/// use rpn::{evaluate, Operator, Token};
///
/// // (5 + 10) * 3
/// let tokens = [
///     Token::Operand(5),
///     Token::Operand(10),
///     Token::Operator(Operator::Add),
///     Token::Operand(3),
///     Token::Operator(Operator::Mul),
/// ];
/// assert_eq!(evaluate(&tokens), Ok(45));
/// ```
pub fn evaluate(tokens: &[Token]) -> Result<i64> {
    evaluate_with(tokens, &EvalContext::default())
}

/// Evaluate a token sequence.
///
/// Processes tokens left to right and stops at the first error. On success
/// the stack held exactly one value after the last token.
pub fn evaluate_with(tokens: &[Token], ctx: &EvalContext) -> Result<i64> {
    let operands = tokens.iter().filter(|t| !t.is_operator()).count();
    let mut stack = Stack::with_capacity(ctx.initial_capacity(operands));

    for (position, token) in tokens.iter().enumerate() {
        if let Err(e) = token.eval(&mut stack, position) {
            debug!("evaluation failed: {}", e);
            return Err(e);
        }
        if ctx.trace {
            debug!("[{:>3}] {:<6} | {}", position, token.to_string(), stack);
        }
    }

    stack.into_result(tokens.len()).map_err(|e| {
        debug!("evaluation failed: {}", e);
        e
    })
}
