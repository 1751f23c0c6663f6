//! Bundled prelude: derived combiners written in Wat itself.

use crate::interpreter::Interpreter;
use crate::RunError;

const PRELUDE: &str = include_str!("prelude.wat");

impl Interpreter {
    /// Evaluate the bundled prelude in the root environment.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn load_prelude(&mut self) -> Result<(), RunError> {
        self.eval_source(PRELUDE)?;
        Ok(())
    }
}
