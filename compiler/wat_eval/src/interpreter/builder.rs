//! `InterpreterBuilder` for creating Interpreter instances.

use super::Interpreter;
use crate::eval_mode::EvalMode;
use crate::output::{buffer_output, silent_output, stdout_output, SharedOutput};
use crate::RunError;

/// Builder for creating Interpreter instances with various configurations.
///
/// The output sink defaults by mode: stdout for `Interpret`, a buffer for
/// `TestRun`, nothing for `Budgeted`.
pub struct InterpreterBuilder {
    mode: EvalMode,
    output: Option<SharedOutput>,
    prelude: bool,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            mode: EvalMode::default(),
            output: None,
            prelude: true,
        }
    }

    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the sink `display` writes to. Overrides the mode-based default.
    #[must_use]
    pub fn output(mut self, output: SharedOutput) -> Self {
        self.output = Some(output);
        self
    }

    /// Whether to load the bundled prelude (`lambda`, `quote`, ...).
    #[must_use]
    pub fn prelude(mut self, load: bool) -> Self {
        self.prelude = load;
        self
    }

    /// Build the interpreter, loading the prelude if requested.
    ///
    /// Fails only if the prelude cannot be read or evaluated.
    pub fn build(self) -> Result<Interpreter, RunError> {
        let output = self.output.unwrap_or_else(|| default_output(&self.mode));
        let mut interp = Interpreter::with_parts(self.mode, output);
        if self.prelude {
            interp.load_prelude()?;
        }
        // The step budget starts after the prelude.
        interp.reset_steps();
        Ok(interp)
    }
}

fn default_output(mode: &EvalMode) -> SharedOutput {
    if mode.allows_io() {
        stdout_output()
    } else if mode.step_budget().is_some() {
        silent_output()
    } else {
        buffer_output()
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
