//! Main execution loop and command dispatch for the paramprog VM.

use crate::builtin::{Builtin, GET_PARAMETER};
use crate::dump::DumpSink;
use crate::error::RuntimeError;
use crate::machine::Machine;
use paramprog_common::{ParameterId, ParameterSource, Token};
use tracing::{debug, trace, warn};

impl Machine {
    /// Execute `tokens` against `params`, starting from an empty stack.
    ///
    /// On success the result is available through [`Machine::stack`].
    /// On error the stack holds whatever was there when the failing
    /// token ran and should not be relied on.
    pub fn execute<P, D>(
        &mut self,
        tokens: &[Token],
        params: &P,
        sink: &mut D,
    ) -> Result<(), RuntimeError>
    where
        P: ParameterSource + ?Sized,
        D: DumpSink + ?Sized,
    {
        self.reset();

        for (at, token) in tokens.iter().enumerate() {
            self.pc = at;
            trace!(at, %token, "execute");

            match token {
                Token::Int(value) => self.push(*value)?,
                Token::String(_) | Token::Uuid(_) => {
                    warn!(at, kind = token.kind(), %token, "ignoring literal outside an argument list");
                }
                Token::Command { name, arguments } => {
                    self.exec_command(name, arguments, params, sink)?
                }
            }
        }

        debug!(tokens = tokens.len(), depth = self.stack.len(), "run complete");
        Ok(())
    }

    fn exec_command<P, D>(
        &mut self,
        name: &str,
        arguments: &[Token],
        params: &P,
        sink: &mut D,
    ) -> Result<(), RuntimeError>
    where
        P: ParameterSource + ?Sized,
        D: DumpSink + ?Sized,
    {
        if let Some(builtin) = Builtin::from_name(name) {
            if !arguments.is_empty() {
                trace!(at = self.pc, command = name, "built-in ignores its arguments");
            }
            self.exec_builtin(builtin, sink)
        } else if name == GET_PARAMETER {
            self.exec_get_parameter(arguments, params)
        } else {
            Err(RuntimeError::UnknownCommand {
                at: self.pc,
                name: name.to_string(),
            })
        }
    }

    fn exec_builtin<D: DumpSink + ?Sized>(
        &mut self,
        builtin: Builtin,
        sink: &mut D,
    ) -> Result<(), RuntimeError> {
        self.require(builtin)?;

        match builtin {
            Builtin::Dump => {
                sink.dump(&self.stack);
                Ok(())
            }
            Builtin::Dup => {
                let a = self.pop(builtin)?;
                self.push(a)?;
                self.push(a)
            }
            Builtin::Chs => {
                let a = self.pop(builtin)?;
                self.push(a.wrapping_neg())
            }
            Builtin::Add => self.exec_binary(builtin, |a, b| Ok(a.wrapping_add(b))),
            Builtin::Sub => self.exec_binary(builtin, |a, b| Ok(a.wrapping_sub(b))),
            Builtin::Mul => self.exec_binary(builtin, |a, b| Ok(a.wrapping_mul(b))),
            Builtin::Div => {
                let at = self.pc;
                self.exec_binary(builtin, |a, b| {
                    if b == 0 {
                        Err(RuntimeError::DivisionByZero { at })
                    } else {
                        Ok(a.wrapping_div(b))
                    }
                })
            }
            Builtin::Dupc => {
                let b = self.pop(builtin)?;
                let a = self.pop(builtin)?;
                self.push(a)?;
                self.push(b)?;
                self.push(a)?;
                self.push(b)
            }
            Builtin::Swap => {
                let b = self.pop(builtin)?;
                let a = self.pop(builtin)?;
                self.push(b)?;
                self.push(a)
            }
            Builtin::AddXy => self.exec_offset_pair(builtin, i64::wrapping_add),
            Builtin::SubXy => self.exec_offset_pair(builtin, i64::wrapping_sub),
        }
    }

    /// `a, b` → `op(a, b)`
    fn exec_binary(
        &mut self,
        builtin: Builtin,
        op: impl FnOnce(i64, i64) -> Result<i64, RuntimeError>,
    ) -> Result<(), RuntimeError> {
        let b = self.pop(builtin)?;
        let a = self.pop(builtin)?;
        let result = op(a, b)?;
        self.push(result)
    }

    /// `a, b, c` → `op(a, c), op(b, c)`
    fn exec_offset_pair(
        &mut self,
        builtin: Builtin,
        op: fn(i64, i64) -> i64,
    ) -> Result<(), RuntimeError> {
        let c = self.pop(builtin)?;
        let b = self.pop(builtin)?;
        let a = self.pop(builtin)?;
        self.push(op(a, c))?;
        self.push(op(b, c))
    }

    fn exec_get_parameter<P: ParameterSource + ?Sized>(
        &mut self,
        arguments: &[Token],
        params: &P,
    ) -> Result<(), RuntimeError> {
        let at = self.pc;
        let name = match arguments {
            [Token::String(name)] => name,
            _ => {
                return Err(RuntimeError::BadArguments {
                    at,
                    command: GET_PARAMETER,
                })
            }
        };

        let parameter =
            ParameterId::from_name(name).ok_or_else(|| RuntimeError::InvalidParameterName {
                at,
                name: name.clone(),
            })?;
        let value = params
            .value(parameter)
            .ok_or(RuntimeError::ParameterNotFound { at, parameter })?;

        self.push(value)
    }
}
