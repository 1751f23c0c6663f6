//! Built-in operatives: `def`, `if`, `vau`, `eval`, `begin`, `loop1`.
//!
//! The control forms live in their own modules and are only dispatched from
//! here.

use wat_ir::errors::{malformed_combination, type_mismatch};
use wat_ir::{EnvId, EvalResult, Form, Frame, SuspendExt, Value};

use super::evaluate::Resume;
use super::Interpreter;

impl Interpreter {
    /// Dispatch a built-in operative.
    ///
    /// Wrapped forms receive their arguments already evaluated.
    pub(crate) fn combine_form(&mut self, env: EnvId, form: Form, operands: &Value) -> EvalResult {
        match form {
            Form::Def => self.form_def(env, None, operands),
            Form::If => self.form_if(env, None, operands),
            Form::Vau => self.form_vau(env, operands),
            Form::Eval => self.form_eval(operands),
            Form::Begin => self.form_begin(env, None, operands.clone()),
            Form::Loop => self.form_loop(env, None, operands),
            Form::Catch => self.form_catch(env, None, operands),
            Form::Throw => self.form_throw(operands),
            Form::Finally => self.form_finally(env, None, operands),
            Form::DNew => self.form_dnew(operands),
            Form::DLet => self.form_dlet(env, None, operands),
            Form::DRef => self.form_dref(operands),
            Form::PushPrompt => self.form_push_prompt(env, None, operands),
            Form::TakeSubcont => self.form_take_subcont(operands),
            Form::PushSubcont => self.form_push_subcont(operands),
        }
    }

    /// `(def pattern expr)`
    pub(crate) fn form_def(
        &mut self,
        env: EnvId,
        resume: Option<Resume<'_>>,
        operands: &Value,
    ) -> EvalResult {
        let [pattern, expr] = self.operands(Form::Def, operands)?;
        let value = self
            .eval_or_resume(env, resume, &expr)
            .on_suspend(|| Frame::Define {
                env,
                operands: operands.clone(),
            })?;
        self.bind(env, &pattern, value.clone())?;
        Ok(value)
    }

    /// `(if test consequent alternative)`
    pub(crate) fn form_if(
        &mut self,
        env: EnvId,
        resume: Option<Resume<'_>>,
        operands: &Value,
    ) -> EvalResult {
        let [test, consequent, alternative] = self.operands(Form::If, operands)?;
        let test = self
            .eval_or_resume(env, resume, &test)
            .on_suspend(|| Frame::Branch {
                env,
                operands: operands.clone(),
            })?;
        if test.is_truthy() {
            self.eval(env, &consequent)
        } else {
            self.eval(env, &alternative)
        }
    }

    /// `(vau params env-param body)`
    fn form_vau(&mut self, env: EnvId, operands: &Value) -> EvalResult {
        let [params, env_param, body] = self.operands(Form::Vau, operands)?;
        self.check_pattern(&params)?;
        self.check_pattern(&env_param)?;
        Ok(Value::operative(params, env_param, body, env))
    }

    /// `(eval expr env)`
    fn form_eval(&mut self, operands: &Value) -> EvalResult {
        let [expr, target] = self.operands(Form::Eval, operands)?;
        let Value::Env(target) = target else {
            return Err(type_mismatch("environment", target.kind_name()).into());
        };
        self.eval(target, &expr)
    }

    /// `(begin expr...)`
    ///
    /// `body` is the remaining expression list; when resuming, its head is
    /// the expression that suspended. The last expression is evaluated in
    /// tail position and records no frame.
    pub(crate) fn form_begin(
        &mut self,
        env: EnvId,
        resume: Option<Resume<'_>>,
        body: Value,
    ) -> EvalResult {
        if body.is_nil() {
            return Ok(Value::Void);
        }
        let mut resume = resume;
        let mut body = body;
        loop {
            let Value::Pair(id) = body else {
                return Err(
                    malformed_combination(Form::Begin.name(), "body must be a proper list").into(),
                );
            };
            let (expr, rest) = self.pairs.split(id);
            let result = self.eval_or_resume(env, resume.take(), &expr);
            if rest.is_nil() {
                return result;
            }
            result.on_suspend(|| Frame::Sequence {
                env,
                body: body.clone(),
            })?;
            body = rest;
        }
    }

    /// `(loop1 expr)`: never returns normally.
    pub(crate) fn form_loop(
        &mut self,
        env: EnvId,
        resume: Option<Resume<'_>>,
        operands: &Value,
    ) -> EvalResult {
        let [body] = self.operands(Form::Loop, operands)?;
        let mut resume = resume;
        loop {
            self.eval_or_resume(env, resume.take(), &body)
                .on_suspend(|| Frame::Loop {
                    env,
                    operands: operands.clone(),
                })?;
            self.mode_state.check_budget()?;
        }
    }
}
