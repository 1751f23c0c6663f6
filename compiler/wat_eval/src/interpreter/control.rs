//! Delimited control: `push-prompt*`, `take-subcont*`, `push-subcont*`.

use wat_ir::errors::type_mismatch;
use wat_ir::{ControlAction, EnvId, EvalResult, Form, Frame, SuspendExt, Suspension, Value};

use super::evaluate::Resume;
use super::Interpreter;

impl Interpreter {
    /// `(push-prompt* prompt thunk)`
    ///
    /// A suspension to this prompt is reified as a continuation and handed to
    /// its handler; suspensions to other prompts pass through.
    pub(crate) fn form_push_prompt(
        &mut self,
        env: EnvId,
        resume: Option<Resume<'_>>,
        operands: &Value,
    ) -> EvalResult {
        let [prompt, thunk] = self.operands(Form::PushPrompt, operands)?;
        match self.call_or_resume(env, resume, &thunk) {
            Err(ControlAction::Suspend(suspension)) if suspension.prompt.is_identical(&prompt) => {
                let suspension = *suspension;
                let handler = suspension.handler.clone();
                tracing::debug!(
                    prompt = %self.write(&prompt),
                    frames = suspension.frames().len(),
                    "captured continuation"
                );
                let continuation = Value::continuation(suspension.into_frames());
                let args = self.pairs.list([continuation]);
                self.combine(env, &handler, args)
            }
            other => other.on_suspend(|| Frame::Prompt {
                env,
                operands: operands.clone(),
            }),
        }
    }

    /// `(take-subcont* prompt handler)`
    pub(crate) fn form_take_subcont(&mut self, operands: &Value) -> EvalResult {
        let [prompt, handler] = self.operands(Form::TakeSubcont, operands)?;
        Err(Suspension::new(prompt, handler).into())
    }

    /// `(push-subcont* continuation value)`
    ///
    /// The continuation is not consumed; it can be reinstated again.
    pub(crate) fn form_push_subcont(&mut self, operands: &Value) -> EvalResult {
        let [continuation, value] = self.operands(Form::PushSubcont, operands)?;
        let Value::Continuation(k) = continuation else {
            return Err(type_mismatch("continuation", continuation.kind_name()).into());
        };
        tracing::debug!(frames = k.depth(), "reinstating continuation");
        self.resume(Resume {
            frames: k.frames(),
            value,
        })
        .on_suspend(|| Frame::Reinstate)
    }
}
