//! Combiner, environment and host-interaction primitives.

use std::time::{SystemTime, UNIX_EPOCH};

use wat_ir::errors::{failure, read_error, type_mismatch};
use wat_ir::{EvalError, Value};

use super::{env_arg, str_arg, symbol_arg, PrimResult};
use crate::interpreter::Interpreter;

pub(super) fn unwrap(value: &Value) -> PrimResult {
    match value {
        Value::Applicative(apv) => Ok(apv.combiner.clone()),
        other => Err(type_mismatch("applicative", other.kind_name())),
    }
}

pub(super) fn current_milliseconds() -> PrimResult {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|err| EvalError::new(format!("system clock is before the epoch: {err}")))?;
    i64::try_from(elapsed.as_millis())
        .map(Value::Int)
        .map_err(|_| EvalError::new("current time does not fit in an integer"))
}

impl Interpreter {
    /// `(list* a b ... tail)`; `(list*)` is `()`.
    pub(super) fn list_star(&mut self, args: &[Value]) -> Value {
        match args.split_last() {
            Some((tail, items)) => self.pairs.list_star(items.iter().cloned(), tail.clone()),
            None => Value::Nil,
        }
    }

    /// `(make-environment [parent])`
    pub(super) fn make_environment(&mut self, args: &[Value]) -> PrimResult {
        let parent = args.first().map(env_arg).transpose()?;
        Ok(Value::Env(self.envs.alloc(parent)))
    }

    /// `(defined? symbol env)`
    pub(super) fn is_defined(&self, symbol: &Value, env: &Value) -> PrimResult {
        let name = symbol_arg(symbol)?;
        let env = env_arg(env)?;
        Ok(self.envs.is_bound(env, name).into())
    }

    pub(super) fn display_value(&self, value: &Value) -> Value {
        self.output.write_line(&self.display(value));
        value.clone()
    }

    pub(super) fn log_value(&self, value: &Value) -> Value {
        tracing::info!(target: "wat::log", "{}", self.display(value));
        value.clone()
    }

    /// `(read-from-string text)`: the forms in `text`, as a list.
    pub(super) fn read_from_string(&mut self, text: &Value) -> PrimResult {
        let text = str_arg(text)?.clone();
        let forms = wat_parse::parse(&text, &mut self.pairs, &self.interner)
            .map_err(|err| read_error(err.to_string()))?;
        Ok(self.pairs.list(forms))
    }

    pub(super) fn fail(&self, reason: &Value) -> EvalError {
        failure(self.display(reason))
    }
}
