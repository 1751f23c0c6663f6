//! Parameter-tree binding.
//!
//! A pattern is a tree of symbols (bind), `#ign` (skip), `()` (require nil)
//! and pairs (destructure). Heads recurse; tails are walked iteratively so
//! long rest lists do not deepen the stack.

use wat_ir::errors::{malformed_pattern, pattern_mismatch};
use wat_ir::{EnvId, EvalError, Value};

use super::Interpreter;
use wat_stack::ensure_sufficient_stack;

impl Interpreter {
    /// Match `value` against `pattern`, defining captures in `env`.
    pub(crate) fn bind(
        &mut self,
        env: EnvId,
        pattern: &Value,
        value: Value,
    ) -> Result<(), EvalError> {
        ensure_sufficient_stack(|| {
            let mut pattern = pattern.clone();
            let mut value = value;
            loop {
                match &pattern {
                    Value::Symbol(name) => {
                        self.envs.define(env, *name, value);
                        return Ok(());
                    }
                    Value::Ign => return Ok(()),
                    Value::Nil if value.is_nil() => return Ok(()),
                    Value::Nil => return Err(self.mismatch(&pattern, &value)),
                    Value::Pair(pid) => {
                        let Value::Pair(vid) = value else {
                            return Err(self.mismatch(&pattern, &value));
                        };
                        let (phead, ptail) = self.pairs.split(*pid);
                        let (vhead, vtail) = self.pairs.split(vid);
                        self.bind(env, &phead, vhead)?;
                        pattern = ptail;
                        value = vtail;
                    }
                    other => return Err(malformed_pattern(self.write(other))),
                }
            }
        })
    }

    /// Reject patterns `bind` could never accept.
    pub(crate) fn check_pattern(&self, pattern: &Value) -> Result<(), EvalError> {
        ensure_sufficient_stack(|| {
            let mut cursor = pattern;
            loop {
                match cursor {
                    Value::Symbol(_) | Value::Ign | Value::Nil => return Ok(()),
                    Value::Pair(id) => {
                        self.check_pattern(self.pairs.car(*id))?;
                        cursor = self.pairs.cdr(*id);
                    }
                    other => return Err(malformed_pattern(self.write(other))),
                }
            }
        })
    }

    #[cold]
    fn mismatch(&self, pattern: &Value, value: &Value) -> EvalError {
        pattern_mismatch(self.write(pattern), self.write(value))
    }
}
