//! Tagged exceptions and `finally`.

use wat_ir::{ControlAction, EnvId, EvalResult, Form, Frame, SuspendExt, Value};

use super::evaluate::Resume;
use super::Interpreter;

impl Interpreter {
    /// `(throw* tag payload)`
    pub(crate) fn form_throw(&mut self, operands: &Value) -> EvalResult {
        let [tag, payload] = self.operands(Form::Throw, operands)?;
        Err(ControlAction::throw(tag, payload))
    }

    /// `(catch* tag thunk)`: a throw to an identical tag yields its payload.
    pub(crate) fn form_catch(
        &mut self,
        env: EnvId,
        resume: Option<Resume<'_>>,
        operands: &Value,
    ) -> EvalResult {
        let [tag, thunk] = self.operands(Form::Catch, operands)?;
        match self.call_or_resume(env, resume, &thunk) {
            Err(ControlAction::Throw(thrown)) if thrown.tag.is_identical(&tag) => {
                Ok(thrown.payload)
            }
            other => other.on_suspend(|| Frame::Catch {
                env,
                operands: operands.clone(),
            }),
        }
    }

    /// `(finally protected cleanup)`
    ///
    /// Cleanup runs exactly once after the protected expression returns,
    /// throws or fails. A suspension out of the protected expression leaves
    /// cleanup pending until the resumed extent finishes.
    pub(crate) fn form_finally(
        &mut self,
        env: EnvId,
        resume: Option<Resume<'_>>,
        operands: &Value,
    ) -> EvalResult {
        let [protected, cleanup] = self.operands(Form::Finally, operands)?;
        let outcome = self.eval_or_resume(env, resume, &protected);
        if outcome.as_ref().is_err_and(ControlAction::is_suspension) {
            return outcome.on_suspend(|| Frame::Protect {
                env,
                operands: operands.clone(),
            });
        }
        self.run_cleanup(env, None, &cleanup, outcome)
    }

    /// Evaluate `cleanup`, then finish with `pending`.
    ///
    /// An error or throw raised by the cleanup itself replaces `pending`.
    pub(crate) fn run_cleanup(
        &mut self,
        env: EnvId,
        resume: Option<Resume<'_>>,
        cleanup: &Value,
        pending: EvalResult,
    ) -> EvalResult {
        match self.eval_or_resume(env, resume, cleanup) {
            Ok(_) => pending,
            Err(ControlAction::Suspend(mut suspension)) => {
                suspension.push_frame(Frame::Cleanup {
                    env,
                    cleanup: cleanup.clone(),
                    pending,
                });
                Err(ControlAction::Suspend(suspension))
            }
            Err(other) => Err(other),
        }
    }
}
