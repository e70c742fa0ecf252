//! VM state: the integer stack and its limits.

use crate::builtin::Builtin;
use crate::error::RuntimeError;

/// Resource limits applied during execution.
///
/// The default is unbounded; a cap is opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    /// Pushing beyond this many values is a runtime error.
    pub max_stack_depth: Option<usize>,
}

impl Limits {
    /// Limits with the stack capped at `depth` values.
    pub fn with_max_stack_depth(depth: usize) -> Self {
        Self {
            max_stack_depth: Some(depth),
        }
    }
}

/// The paramprog virtual machine.
///
/// A machine can be reused: each run clears the stack but keeps its
/// allocation.
#[derive(Debug, Clone, Default)]
pub struct Machine {
    /// Operand stack, bottom first.
    pub(crate) stack: Vec<i64>,
    pub(crate) limits: Limits,
    /// Index of the top-level token being executed.
    pub(crate) pc: usize,
}

impl Machine {
    /// Create a machine with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a machine with the given limits.
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Stack contents after the last run, bottom first.
    pub fn stack(&self) -> &[i64] {
        &self.stack
    }

    /// Consume the machine, returning its stack.
    pub fn into_stack(self) -> Vec<i64> {
        self.stack
    }

    /// Clear the stack and rewind to the first token.
    pub(crate) fn reset(&mut self) {
        self.stack.clear();
        self.pc = 0;
    }

    /// Push a value onto the stack, checking the depth limit.
    pub(crate) fn push(&mut self, value: i64) -> Result<(), RuntimeError> {
        if let Some(limit) = self.limits.max_stack_depth {
            if self.stack.len() >= limit {
                return Err(RuntimeError::StackOverflow { at: self.pc, limit });
            }
        }
        self.stack.push(value);
        Ok(())
    }

    /// Pop a value on behalf of `builtin`.
    pub(crate) fn pop(&mut self, builtin: Builtin) -> Result<i64, RuntimeError> {
        self.stack.pop().ok_or(RuntimeError::StackUnderflow {
            at: self.pc,
            command: builtin.name(),
        })
    }

    /// Fail early if the stack cannot satisfy `builtin`.
    pub(crate) fn require(&self, builtin: Builtin) -> Result<(), RuntimeError> {
        let (pops, _) = builtin.arity();
        if self.stack.len() < pops {
            return Err(RuntimeError::StackUnderflow {
                at: self.pc,
                command: builtin.name(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_respects_limit() {
        let mut m = Machine::with_limits(Limits::with_max_stack_depth(2));
        m.push(1).unwrap();
        m.push(2).unwrap();
        assert_eq!(
            m.push(3),
            Err(RuntimeError::StackOverflow { at: 0, limit: 2 })
        );
        assert_eq!(m.stack(), &[1, 2]);
    }

    #[test]
    fn pop_empty_reports_command() {
        let mut m = Machine::new();
        m.pc = 4;
        assert_eq!(
            m.pop(Builtin::Swap),
            Err(RuntimeError::StackUnderflow {
                at: 4,
                command: "swap"
            })
        );
    }

    #[test]
    fn require_checks_arity() {
        let mut m = Machine::new();
        m.push(1).unwrap();
        m.push(2).unwrap();
        assert!(m.require(Builtin::Add).is_ok());
        assert!(m.require(Builtin::AddXy).is_err());
        assert!(m.require(Builtin::Dump).is_ok());
    }

    #[test]
    fn reset_clears_stack() {
        let mut m = Machine::new();
        m.push(7).unwrap();
        m.pc = 3;
        m.reset();
        assert!(m.stack().is_empty());
        assert_eq!(m.pc, 0);
    }

    #[test]
    fn default_limits_are_unbounded() {
        let mut m = Machine::new();
        assert_eq!(m.limits().max_stack_depth, None);
        for i in 0..10_000 {
            m.push(i).unwrap();
        }
        assert_eq!(m.stack().len(), 10_000);
    }
}
