//! Macro expansion through the per-form cache.

use wat_ir::{EnvId, EvalResult, Frame, Heap, Macro, PairId, SuspendExt};

use super::evaluate::Resume;
use super::Interpreter;

impl Interpreter {
    /// Expand `form` with `expander` and evaluate the expansion in `env`.
    ///
    /// A cached expansion is reused only while the form's head still
    /// evaluates to the same macro. An expansion that suspends is cached
    /// once the resumed expander finishes.
    pub(crate) fn expand_macro(
        &mut self,
        env: EnvId,
        resume: Option<Resume<'_>>,
        expander: Heap<Macro>,
        form: PairId,
    ) -> EvalResult {
        if resume.is_none() {
            if let Some(expansion) = self.macro_cache.get(form, &expander) {
                return self.eval(env, &expansion);
            }
        }

        let expansion = match resume {
            Some(k) => self.resume(k),
            None => {
                tracing::debug!(form = %self.write(&wat_ir::Value::Pair(form)), "expanding macro");
                let operands = self.pairs.cdr(form).clone();
                self.combine(env, &expander.expander, operands)
            }
        }
        .on_suspend(|| Frame::MacroExpansion {
            env,
            form,
            expander: expander.clone(),
        })?;

        self.macro_cache.insert(form, expander, expansion.clone());
        self.eval(env, &expansion)
    }
}
