//! Evaluation context configuration

/// Configuration for a single evaluation.
///
/// Passed by reference to [`crate::evaluate_with`]. Holds no state of its
/// own, so one context can be shared across threads and calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvalContext {
    /// Log the stack after every token at `debug` level
    pub trace: bool,

    /// Initial stack capacity, clamped to the operand count. Zero sizes the
    /// stack from the operand count.
    pub stack_capacity: usize,
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with tracing enabled.
    pub fn with_trace() -> Self {
        Self {
            trace: true,
            ..Default::default()
        }
    }

    /// Set the initial stack capacity.
    pub fn stack_capacity(mut self, capacity: usize) -> Self {
        self.stack_capacity = capacity;
        self
    }

    /// Capacity to reserve for a program with `operands` operand tokens.
    ///
    /// The operand count bounds the stack depth from above, so a larger
    /// configured capacity is never reserved.
    pub fn initial_capacity(&self, operands: usize) -> usize {
        if self.stack_capacity == 0 {
            operands
        } else {
            self.stack_capacity.min(operands)
        }
    }
}
