//! Dynamic variables: `dnew`, `dlet*`, `dref`.
//!
//! A binding is installed for the extent of a thunk call and the previous
//! value is restored on every exit, including suspension. Resuming through
//! a `DynamicBinding` frame installs the binding again for the resumed
//! extent, so the binding is decided when the continuation is invoked.

use wat_ir::errors::{arity_mismatch, malformed_combination, type_mismatch};
use wat_ir::value::DynamicCell;
use wat_ir::{Arity, EnvId, EvalError, EvalResult, Form, Frame, Heap, SuspendExt, Value};

use super::evaluate::Resume;
use super::Interpreter;

impl Interpreter {
    /// `(dnew [initial])`
    pub(crate) fn form_dnew(&mut self, operands: &Value) -> EvalResult {
        let args = self.pairs.list_to_vec(operands).ok_or_else(|| {
            malformed_combination(Form::DNew.name(), "operands must be a proper list")
        })?;
        let arity = Arity::Range(0, 1);
        match args.as_slice() {
            [] => Ok(Value::dynamic(Value::Void)),
            [initial] => Ok(Value::dynamic(initial.clone())),
            _ => Err(arity_mismatch(Form::DNew.name(), arity, args.len()).into()),
        }
    }

    /// `(dlet* cell value thunk)`
    pub(crate) fn form_dlet(
        &mut self,
        env: EnvId,
        resume: Option<Resume<'_>>,
        operands: &Value,
    ) -> EvalResult {
        let [var, value, thunk] = self.operands(Form::DLet, operands)?;
        let cell = dynamic_cell(&var)?;
        let saved = cell.replace(value);
        let result = self.call_or_resume(env, resume, &thunk);
        cell.replace(saved);
        result.on_suspend(|| Frame::DynamicBinding {
            env,
            operands: operands.clone(),
        })
    }

    /// `(dref cell)`
    pub(crate) fn form_dref(&mut self, operands: &Value) -> EvalResult {
        let [var] = self.operands(Form::DRef, operands)?;
        Ok(dynamic_cell(&var)?.get())
    }
}

fn dynamic_cell(value: &Value) -> Result<&Heap<DynamicCell>, EvalError> {
    match value {
        Value::DynVar(cell) => Ok(cell),
        other => Err(type_mismatch("dynamic variable", other.kind_name())),
    }
}
