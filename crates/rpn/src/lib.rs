//! # rpn
//!
//! A reverse-Polish-notation evaluator for `i64` arithmetic.
//!
//! A program is an ordered sequence of [`Token`]s, each either an operand
//! or one of the five binary operators `+ - * / %`. Evaluation makes a single
//! left-to-right pass over the tokens using a [`Stack`]: operands are pushed,
//! operators pop their right then left operand and push the result. A
//! well-formed program leaves exactly one value, which is the result.
//!
//! ## Numeric semantics
//!
//! - Operands and results are `i64`; any result outside its range is an
//!   [`EvalError::IntegerOverflow`].
//! - `/` and `%` truncate toward zero, so `-7 / 2 == -3` and `-7 % 2 == -1`.
//! - A zero right operand of `/` or `%` is an [`EvalError::DivisionByZero`].
//!
//! ## Example
//!
//! ```
//! use rpn::{Operator, Program, Token};
//!
//! // (20 / 4) + (7 % 4)
//! let program: Program = [
//!     Token::from(20),
//!     Token::from(4),
//!     Token::from(Operator::Div),
//!     Token::from(7),
//!     Token::from(4),
//!     Token::from(Operator::Mod),
//!     Token::from(Operator::Add),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(program.evaluate(), Ok(8));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod eval;
pub mod program;
pub mod stack;
pub mod token;

// Re-export main types
pub use context::EvalContext;
pub use error::{EvalError, Result, TokenError};
pub use eval::{evaluate, evaluate_with, Evaluate};
pub use program::Program;
pub use stack::Stack;
pub use token::{Operator, Token};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
