//! Core evaluation: symbols, combinations, combiners and resumption.
//!
//! # Suspension and resumption
//!
//! Evaluation recurses on the host stack. When `take-subcont*` suspends,
//! the suspension is returned as an error and every suspendable step it
//! passes records a [`Frame`] on it. Nothing on the host stack survives;
//! the frames are the whole of the captured computation.
//!
//! Resuming walks the chain from the outermost frame inward. Each frame
//! re-enters the operation that recorded it with a [`Resume`] token in place
//! of the recursive call it was waiting on, until the innermost `Capture`
//! frame hands back the resumed value. If the replay suspends again, the
//! re-entered operations record fresh frames as usual.

use wat_ir::errors::{assertion_failed, malformed_combination, not_a_combiner, unbound_identifier};
use wat_ir::value::Operative;
use wat_ir::{
    EnvId, EvalError, EvalResult, EvaluatedArgs, Frame, Name, PairId, SuspendExt, Value,
};

use super::Interpreter;
use wat_stack::ensure_sufficient_stack;

/// Resume token: the frames still to replay (innermost first) and the value
/// that replaces the innermost suspended call.
pub(crate) struct Resume<'k> {
    pub frames: &'k [Frame],
    pub value: Value,
}

impl Interpreter {
    /// Evaluate `expr` in `env`.
    ///
    /// Symbols are looked up, pairs are combinations, everything else
    /// evaluates to itself.
    pub(crate) fn eval(&mut self, env: EnvId, expr: &Value) -> EvalResult {
        ensure_sufficient_stack(|| match expr {
            Value::Symbol(name) => self.lookup_symbol(env, *name),
            Value::Pair(form) => self.eval_combination(env, None, *form),
            other => Ok(other.clone()),
        })
    }

    /// Evaluate `expr`, or continue a suspended evaluation of it.
    pub(crate) fn eval_or_resume(
        &mut self,
        env: EnvId,
        resume: Option<Resume<'_>>,
        expr: &Value,
    ) -> EvalResult {
        match resume {
            Some(k) => self.resume(k),
            None => self.eval(env, expr),
        }
    }

    /// Combine `combiner` with no operands, or continue that call.
    pub(crate) fn call_or_resume(
        &mut self,
        env: EnvId,
        resume: Option<Resume<'_>>,
        combiner: &Value,
    ) -> EvalResult {
        match resume {
            Some(k) => self.resume(k),
            None => self.combine(env, combiner, Value::Nil),
        }
    }

    fn lookup_symbol(&self, env: EnvId, name: Name) -> EvalResult {
        match self.envs.lookup(env, name) {
            Some(value) => Ok(value.clone()),
            None => Err(unbound_identifier(self.interner.lookup(name)).into()),
        }
    }

    /// Evaluate the operator, then hand the raw operands to it.
    pub(crate) fn eval_combination(
        &mut self,
        env: EnvId,
        resume: Option<Resume<'_>>,
        form: PairId,
    ) -> EvalResult {
        let operator = match resume {
            Some(k) => self.resume(k),
            None => {
                let head = self.pairs.car(form).clone();
                self.eval(env, &head)
            }
        }
        .on_suspend(|| Frame::Operator { env, form })?;

        match operator {
            Value::Macro(expander) => self.expand_macro(env, None, expander, form),
            combiner => {
                let operands = self.pairs.cdr(form).clone();
                self.combine(env, &combiner, operands)
            }
        }
    }

    /// Combiner protocol: apply `combiner` to `operands` in `env`.
    pub(crate) fn combine(&mut self, env: EnvId, combiner: &Value, operands: Value) -> EvalResult {
        match combiner {
            Value::Operative(op) => {
                self.mode_state.check_budget()?;
                self.apply_operative(env, op, operands)
            }
            Value::Applicative(apv) => {
                self.eval_arguments(env, None, &apv.combiner, EvaluatedArgs::new(), operands)
            }
            Value::Form(form) => {
                self.mode_state.check_budget()?;
                self.combine_form(env, *form, &operands)
            }
            Value::Primitive(_) | Value::Host(_) | Value::TypeAccessor(_) => {
                let Some(args) = self.pairs.list_to_vec(&operands) else {
                    return Err(malformed_combination(
                        &self.write(combiner),
                        "operands must be a proper list",
                    )
                    .into());
                };
                self.apply_native(combiner, &args)
            }
            other => Err(not_a_combiner(self.write(other)).into()),
        }
    }

    fn apply_operative(&mut self, env: EnvId, op: &Operative, operands: Value) -> EvalResult {
        let local = self.envs.alloc(Some(op.static_env));
        self.bind(local, &op.params, operands)?;
        self.bind(local, &op.env_param, Value::Env(env))?;
        self.eval(local, &op.body)
    }

    /// Call a native combiner on evaluated arguments.
    fn apply_native(&mut self, combiner: &Value, args: &[Value]) -> EvalResult {
        self.mode_state.check_budget()?;
        let result = match combiner {
            Value::Primitive(prim) => self.call_primitive(*prim, args),
            Value::Host(host) => (host.func)(&mut self.pairs, args)
                .map_err(|err| err.with_note(format!("in host function {}", host.name))),
            Value::TypeAccessor(accessor) => self.access_type(accessor, args),
            other => Err(not_a_combiner(self.write(other))),
        };
        result.map_err(Into::into)
    }

    /// Evaluate the operands of an applicative left to right, then combine
    /// the wrapped combiner with the results.
    ///
    /// `done` holds the arguments already evaluated and `todo` the operand
    /// list whose head is next. When resuming, the resumed value stands in
    /// for the head of `todo`.
    pub(crate) fn eval_arguments(
        &mut self,
        env: EnvId,
        resume: Option<Resume<'_>>,
        combiner: &Value,
        mut done: EvaluatedArgs,
        mut todo: Value,
    ) -> EvalResult {
        let mut resume = resume;
        loop {
            let id = match &todo {
                Value::Nil => break,
                Value::Pair(id) => *id,
                _ => {
                    return Err(malformed_combination(
                        "applicative combination",
                        "operands must be a proper list",
                    )
                    .into())
                }
            };
            let value = match resume.take() {
                Some(k) => self.resume(k),
                None => {
                    let operand = self.pairs.car(id).clone();
                    self.eval(env, &operand)
                }
            }
            .on_suspend(|| Frame::Arguments {
                env,
                combiner: combiner.clone(),
                done: done.clone(),
                todo: todo.clone(),
            })?;
            done.push(value);
            todo = self.pairs.cdr(id).clone();
        }

        match combiner {
            Value::Primitive(_) | Value::Host(_) | Value::TypeAccessor(_) => {
                self.apply_native(combiner, &done)
            }
            _ => {
                let args = self.pairs.list(done);
                self.combine(env, combiner, args)
            }
        }
    }

    /// Replay a captured chain, feeding `k.value` to its innermost step.
    pub(crate) fn resume(&mut self, k: Resume<'_>) -> EvalResult {
        let Resume { frames, value } = k;
        let Some((frame, inner)) = frames.split_last() else {
            return Err(assertion_failed("resumed an empty continuation").into());
        };
        ensure_sufficient_stack(move || {
            let next = Resume {
                frames: inner,
                value,
            };
            match frame {
                Frame::Capture if inner.is_empty() => Ok(next.value),
                Frame::Capture => {
                    Err(assertion_failed("capture frame is not the innermost frame").into())
                }
                Frame::Operator { env, form } => self.eval_combination(*env, Some(next), *form),
                Frame::Arguments {
                    env,
                    combiner,
                    done,
                    todo,
                } => self.eval_arguments(*env, Some(next), combiner, done.clone(), todo.clone()),
                Frame::Define { env, operands } => self.form_def(*env, Some(next), operands),
                Frame::Branch { env, operands } => self.form_if(*env, Some(next), operands),
                Frame::Sequence { env, body } => self.form_begin(*env, Some(next), body.clone()),
                Frame::Loop { env, operands } => self.form_loop(*env, Some(next), operands),
                Frame::Catch { env, operands } => self.form_catch(*env, Some(next), operands),
                Frame::Protect { env, operands } => self.form_finally(*env, Some(next), operands),
                Frame::Cleanup {
                    env,
                    cleanup,
                    pending,
                } => self.run_cleanup(*env, Some(next), cleanup, pending.clone()),
                Frame::DynamicBinding { env, operands } => {
                    self.form_dlet(*env, Some(next), operands)
                }
                Frame::Prompt { env, operands } => {
                    self.form_push_prompt(*env, Some(next), operands)
                }
                Frame::Reinstate => self.resume(next).on_suspend(|| Frame::Reinstate),
                Frame::MacroExpansion {
                    env,
                    form,
                    expander,
                } => self.expand_macro(*env, Some(next), expander.clone(), *form),
            }
        })
    }

    /// Convert an operand list into exactly `N` operands for `form`.
    pub(crate) fn operands<const N: usize>(
        &self,
        form: wat_ir::Form,
        operands: &Value,
    ) -> Result<[Value; N], EvalError> {
        let items = self.pairs.list_to_vec(operands).ok_or_else(|| {
            malformed_combination(form.name(), "operands must be a proper list")
        })?;
        <[Value; N]>::try_from(items).map_err(|items| {
            malformed_combination(
                form.name(),
                format!("expected {N} operands, got {}", items.len()),
            )
        })
    }
}
